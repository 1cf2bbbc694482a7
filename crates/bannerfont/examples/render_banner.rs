use bannerfont::{FontRegistry, RenderOptions};

fn main() {
    let registry = FontRegistry::with_builtin_fonts().unwrap();
    let text = std::env::args().nth(1).unwrap_or_else(|| "Banner!".into());

    let mut names: Vec<&str> = registry.font_names().collect();
    names.sort_unstable();
    for name in names {
        let rendering = registry
            .render(name, &text, &RenderOptions::default())
            .unwrap();
        println!("--- {name} ---");
        println!("{}", rendering.text);
        if !rendering.dropped.is_empty() {
            println!("(dropped: {:?})", rendering.dropped);
        }
        println!();
    }
}
