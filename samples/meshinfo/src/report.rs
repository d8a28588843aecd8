use meshpack::{Attribute, AttributeType, CompiledMesh};
use nalgebra::DVector;

/// Per-component lower and upper bounds over every vertex of a float attribute.
pub fn bounds(values: &[f32], components: usize) -> Option<(DVector<f32>, DVector<f32>)> {
    if components == 0 {
        return None;
    }
    let mut vertices = values
        .chunks_exact(components)
        .map(DVector::from_column_slice);
    let first = vertices.next()?;
    Some(vertices.fold((first.clone(), first), |(lo, hi), v| {
        (lo.inf(&v), hi.sup(&v))
    }))
}

fn attribute_bounds(mesh: &CompiledMesh, attr: &Attribute) -> Option<String> {
    if attr.ty != AttributeType::Float {
        return None;
    }
    let values = mesh
        .vertex_data()
        .read::<f32>(attr.offset, attr.value_count())?;
    let (lo, hi) = bounds(&values, attr.components as usize)?;
    let ranges: Vec<_> = lo
        .iter()
        .zip(hi.iter())
        .map(|(lo, hi)| format!("[{lo}, {hi}]"))
        .collect();
    Some(ranges.join(" "))
}

/// Print the attribute layout and command list of `mesh` to stdout.
pub fn print(mesh: &CompiledMesh) {
    println!(
        "{:>4}  {:<12} {:>5} {:>8} {:>8} {:>8}",
        "slot", "type", "comps", "offset", "bytes", "vertices"
    );
    for attr in mesh.attributes() {
        println!(
            "{:>4}  {:<12} {:>5} {:>8} {:>8} {:>8}",
            attr.slot,
            attr.ty,
            attr.components,
            attr.offset,
            attr.len,
            attr.vertex_count()
        );
        if let Some(bounds) = attribute_bounds(mesh, attr) {
            println!("      bounds: {bounds}");
        }
    }
    println!(
        "vertex data: {} bytes, index data: {} bytes",
        mesh.vertex_data().len(),
        mesh.index_data().len()
    );
    let indexed = mesh.commands().iter().filter(|c| c.is_indexed()).count();
    println!(
        "{} commands ({indexed} indexed, {} direct)",
        mesh.commands().len(),
        mesh.commands().len() - indexed
    );
    for (i, cmd) in mesh.commands().iter().enumerate() {
        println!("command {i}: {cmd:?}");
    }
}
