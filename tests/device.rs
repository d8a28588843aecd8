use meshpack::{
    compile, execute, Attribute, BufferType, CompiledMesh, Event, ExecuteError, IndexType, Mode,
    RenderCommand, RenderDevice,
};

#[derive(Debug, thiserror::Error)]
#[error("device lost")]
struct DeviceLost;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Create(BufferType, Vec<u8>),
    Bind {
        vertices: usize,
        slots: Vec<(u32, usize)>,
        indices: Option<usize>,
    },
    Indexed(Mode, usize, usize, IndexType),
    Direct(Mode, u32, u32),
}

/// Records every call; buffer handles are indices into `buffers`.
#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<Call>,
    buffers: usize,
    /// Fail the draw call with this index
    fail_at: Option<usize>,
    draws: usize,
}

impl Recorder {
    fn draw(&mut self, call: Call) -> Result<(), DeviceLost> {
        let n = self.draws;
        self.draws += 1;
        if self.fail_at == Some(n) {
            return Err(DeviceLost);
        }
        self.calls.push(call);
        Ok(())
    }
}

impl RenderDevice for Recorder {
    type Buffer = usize;
    type Error = DeviceLost;

    fn create_buffer(&mut self, target: BufferType, data: &[u8]) -> Result<usize, DeviceLost> {
        self.calls.push(Call::Create(target, data.to_vec()));
        self.buffers += 1;
        Ok(self.buffers - 1)
    }

    fn bind_attributes(
        &mut self,
        vertices: &usize,
        attributes: &[Attribute],
        indices: Option<&usize>,
    ) -> Result<(), DeviceLost> {
        self.calls.push(Call::Bind {
            vertices: *vertices,
            slots: attributes.iter().map(|a| (a.slot, a.offset)).collect(),
            indices: indices.copied(),
        });
        Ok(())
    }

    fn draw_indexed(
        &mut self,
        _vertices: &usize,
        _indices: &usize,
        mode: Mode,
        offset: usize,
        count: usize,
        index_type: IndexType,
    ) -> Result<(), DeviceLost> {
        self.draw(Call::Indexed(mode, offset, count, index_type))
    }

    fn draw_direct(
        &mut self,
        _vertices: &usize,
        mode: Mode,
        first: u32,
        count: u32,
    ) -> Result<(), DeviceLost> {
        self.draw(Call::Direct(mode, first, count))
    }
}

fn quad() -> CompiledMesh {
    compile([
        Event::EnterMesh,
        Event::attribute(0, "float", 2, "0 0  1 0  1 1  0 1"),
        Event::attribute(1, "norm-ubyte", 1, "255 128 64 0"),
        Event::indices("triangles", "ubyte", "0 1 2"),
        Event::arrays("line-loop", 0, 4),
        Event::indices("triangles", "ushort", "2 3 0"),
        Event::ExitMesh,
    ])
    .unwrap()
}

#[test]
fn upload_creates_buffers_then_binds() {
    let mesh = quad();
    let mut device = Recorder::default();
    let uploaded = mesh.upload(&mut device).unwrap();

    assert_eq!(*uploaded.vertex_buffer(), 0);
    assert_eq!(uploaded.index_buffer(), Some(&1));
    assert_eq!(uploaded.commands(), mesh.commands());
    assert_eq!(
        device.calls,
        vec![
            Call::Create(BufferType::Array, mesh.vertex_data().to_vec()),
            Call::Create(BufferType::ElementArray, mesh.index_data().to_vec()),
            Call::Bind {
                vertices: 0,
                slots: vec![(0, 0), (1, 32)],
                indices: Some(1),
            },
        ]
    );
}

#[test]
fn upload_skips_empty_index_buffer() {
    let mesh = compile([
        Event::EnterMesh,
        Event::attribute(0, "float", 3, "0 0 0  1 0 0  0 1 0"),
        Event::arrays("triangles", 0, 3),
        Event::ExitMesh,
    ])
    .unwrap();
    let mut device = Recorder::default();
    let uploaded = mesh.upload(&mut device).unwrap();

    assert!(uploaded.index_buffer().is_none());
    assert_eq!(device.buffers, 1);
    uploaded.render(&mut device).unwrap();
    assert_eq!(
        device.calls.last(),
        Some(&Call::Direct(Mode::Triangles, 0, 3))
    );
}

#[test]
fn render_issues_commands_in_order() {
    let mesh = quad();
    let mut device = Recorder::default();
    let uploaded = mesh.upload(&mut device).unwrap();
    device.calls.clear();

    uploaded.render(&mut device).unwrap();
    assert_eq!(
        device.calls,
        vec![
            Call::Indexed(Mode::Triangles, 0, 3, IndexType::U8),
            Call::Direct(Mode::LineLoop, 0, 4),
            Call::Indexed(Mode::Triangles, 3, 3, IndexType::U16),
        ]
    );
}

#[test]
fn indexed_command_without_index_buffer() {
    let commands = [
        RenderCommand::Direct {
            mode: Mode::Points,
            first: 0,
            count: 1,
        },
        RenderCommand::Indexed {
            mode: Mode::Points,
            offset: 0,
            count: 1,
            index_type: IndexType::U32,
        },
    ];
    let mut device = Recorder::default();
    let err = execute(&commands, &0, None, &mut device).unwrap_err();
    assert!(matches!(err, ExecuteError::MissingIndexBuffer(1)));
    assert_eq!(device.calls, vec![Call::Direct(Mode::Points, 0, 1)]);
}

#[test]
fn device_failure_stops_execution() {
    let mesh = quad();
    let mut device = Recorder {
        fail_at: Some(1),
        ..Default::default()
    };
    let uploaded = mesh.upload(&mut device).unwrap();
    device.calls.clear();

    let err = uploaded.render(&mut device).unwrap_err();
    assert!(matches!(err, ExecuteError::Device(DeviceLost)));
    assert_eq!(
        device.calls,
        vec![Call::Indexed(Mode::Triangles, 0, 3, IndexType::U8)]
    );
}
