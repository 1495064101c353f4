use std::io::{stdin, BufRead};
use tracing_subscriber::EnvFilter;
use vista::Value;

#[derive(vista::Data)]
struct Page {
    id: i32,
    name: String,
}

fn main() -> vista::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    vista::set_directory(concat!(env!("CARGO_MANIFEST_DIR"), "/views"));
    vista::share("app", "vista example");

    vista::bind("layouts.main", |s| {
        let app = s.get("app")?.clone();
        s.echo("<html><head><title>")?;
        s.escaped(app)?;
        s.echo("</title></head>\n<body>\n")?;
        s.include("partials.nav", ())?;
        s.yield_section("content", "<p>empty page</p>")?;
        s.echo("</body></html>")
    });

    vista::bind("pages.order", |s| {
        let id = s.get("id")?.clone();
        let name = s.get("name")?.clone();
        s.extends("layouts.main", ());
        s.section("content")?;
        s.echo("<div id=\"")?;
        s.echo(id)?;
        s.echo("\">")?;
        s.escaped(name)?;
        s.echo("</div>\n")?;
        s.end_section()
    });

    loop {
        let mut page = vista::view(Some("pages.order"), Page {
            id: 4,
            name: "<script>alert('foo')</script>".into(),
        })?;
        page.call("withVisitor", vec![Value::from("guest")])?;
        let result = page.render()?;

        tracing::info!(bytes = result.len(), "rendered page");
        println!("{result}");
        println!("[Press ENTER to re render, q to quit]");

        let mut buf = String::new();
        { stdin().lock().read_line(&mut buf)?; }

        if buf == "q\n" {
            break
        }
    }

    Ok(())
}
