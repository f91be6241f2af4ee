//! Build a store in code, edit it by index, print the document.

use svgshapes::{Circle, Line, Rectangle, ShapeStore};

fn main() -> miette::Result<()> {
    let mut store = ShapeStore::new();
    store.push(Rectangle::new(0.0, 0.0, 200.0, 100.0));
    store.push(Circle::new(50.0, 50.0, 25.0));
    store.push(Circle::new(150.0, 50.0, 25.0));

    let old = store.replace(2, Line::new(125.0, 50.0, 175.0, 50.0))?;
    println!("replaced {old}");

    let removed = store.remove(0)?;
    println!("removed {removed}");

    if let Err(err) = store.remove(10) {
        eprintln!("{:?}", miette::Report::new(err));
    }

    print!("{store}");
    Ok(())
}
