use pretty_assertions::assert_eq;
use vista::{Error, Value};

fn setup() {
    vista::reset();
    vista::set_directory("/views");

    vista::bind("layout", |s| {
        s.echo("<body>")?;
        s.yield_section("body", "default")?;
        s.echo("</body>")
    });

    vista::bind("child", |s| {
        s.extends("layout", ());
        s.echo("ignored outside sections")?;
        s.section("body")?;
        s.echo("child body")?;
        s.end_section()
    });
}

#[test]
fn child_fills_parent() {
    setup();

    let mut child = vista::view(Some("child"), ()).unwrap();
    assert_eq!(child.render().unwrap(), "<body>child body</body>");
    assert_eq!(child.parent(), Some("layout"));
    assert_eq!(child.get_section("body", ""), "child body");
}

#[test]
fn layout_standalone_default() {
    setup();

    let mut layout = vista::view(Some("layout"), ()).unwrap();
    assert_eq!(layout.render().unwrap(), "<body>default</body>");
}

#[test]
fn parent_data() {
    setup();
    vista::share("site", "Vista");
    vista::bind("titled", |s| {
        let title = s.get("title")?.clone();
        let site = s.get("site")?.clone();
        s.echo(title)?;
        s.echo(" | ")?;
        s.echo(site)?;
        s.echo(": ")?;
        s.yield_section("body", "")?;
        s.echo(if s.has("own") { " own visible" } else { "" })
    });
    vista::bind("page", |s| {
        let title = s.get("title")?.clone();
        s.extends("titled", [("title", title)]);
        s.section("body")?;
        s.echo("content")?;
        s.end_section()
    });

    let mut page = vista::view(Some("page"), [("title", Value::from("Home")), ("own", true.into())]).unwrap();
    assert_eq!(page.render().unwrap(), "Home | Vista: content");
}

#[test]
fn chained_extends() {
    setup();
    vista::bind("base", |s| {
        s.echo("[")?;
        s.yield_section("body", "")?;
        s.echo("|")?;
        s.yield_section("sidebar", "no sidebar")?;
        s.echo("]")
    });
    vista::bind("two-column", |s| {
        s.extends("base", ());
        s.section("sidebar")?;
        s.echo("menu")?;
        s.end_section()
    });
    vista::bind("article", |s| {
        s.extends("two-column", ());
        s.section("body")?;
        s.echo("article")?;
        s.end_section()
    });

    let mut article = vista::view(Some("article"), ()).unwrap();
    assert_eq!(article.render().unwrap(), "[article|menu]");
}

#[test]
fn parent_appends_to_inherited_section() {
    setup();
    vista::bind("scripts", |s| {
        s.append_section("scripts")?;
        s.echo("<script src=app.js>")?;
        s.end_section()?;
        s.yield_section("scripts", "")
    });
    vista::bind("page", |s| {
        s.extends("scripts", ());
        s.section("scripts")?;
        s.echo("<script src=page.js>")?;
        s.end_section()
    });

    let mut page = vista::view(Some("page"), ()).unwrap();
    assert_eq!(page.render().unwrap(), "<script src=page.js><script src=app.js>");
}

#[test]
fn missing_parent() {
    setup();
    vista::bind("orphan", |s| {
        s.extends("nowhere", ());
        Ok(())
    });

    let err = vista::view(Some("orphan"), ()).unwrap().render().unwrap_err();
    assert!(matches!(err, Error::NotFound { name, .. } if name == "nowhere"));
}

#[test]
fn extends_itself() {
    setup();
    vista::bind("loop", |s| {
        s.extends("loop", ());
        Ok(())
    });

    let err = vista::view(Some("loop"), ()).unwrap().render().unwrap_err();
    assert!(matches!(err, Error::Recursion { name, depth: vista::MAX_DEPTH } if name == "loop"));

    // depth is released after the failure
    let mut layout = vista::view(Some("layout"), ()).unwrap();
    assert_eq!(layout.render().unwrap(), "<body>default</body>");
}
