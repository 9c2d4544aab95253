use poseguide::{Archetype, Direction};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let png = poseguide::synthesize("WALK_CYCLE", Direction::Side, Archetype::Vanguard)?;
    std::fs::write("walk_guide.png", &png)?;
    println!("wrote walk_guide.png ({} bytes)", png.len());

    Ok(())
}
