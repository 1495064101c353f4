use pretty_assertions::assert_eq;
use vista::{Error, SectionMode};

fn setup() {
    vista::reset();
    vista::set_directory("/views");
}

#[test]
fn section_modes() {
    setup();
    vista::bind("sections.mode", |s| {
        s.section("foo")?;
        s.echo("Foo content...\n")?;
        s.end_section()?;
        s.section_mode("foo", SectionMode::Append)?;
        s.echo("append content...\n")?;
        s.end_section()?;
        s.append_section("foo")?;
        s.echo("append content...\n")?;
        s.end_section()?;
        s.section_mode("foo", SectionMode::Prepend)?;
        s.echo("prepend content...\n")?;
        s.end_section()?;
        s.prepend_section("foo")?;
        s.echo("prepend content...\n")?;
        s.end_section()?;
        s.yield_section("foo", "")
    });

    let mut view = vista::view(Some("sections.mode"), ()).unwrap();
    assert_eq!(
        view.render().unwrap(),
        "prepend content...\nprepend content...\nFoo content...\nappend content...\nappend content...\n"
    );
    assert!(view.has_section("foo"));
    assert_eq!(view.sections().len(), 1);
}

fn twice(mode: SectionMode) -> String {
    setup();
    vista::bind("twice", move |s| {
        s.section_mode("s", mode)?;
        s.echo("X")?;
        s.end_section()?;
        s.section_mode("s", mode)?;
        s.echo("Y")?;
        s.end_section()
    });

    let mut view = vista::view(Some("twice"), ()).unwrap();
    view.render().unwrap();
    view.get_section("s", "").to_owned()
}

#[test]
fn rewrite_append_prepend() {
    assert_eq!(twice(SectionMode::Rewrite), "Y");
    assert_eq!(twice(SectionMode::Append), "XY");
    assert_eq!(twice(SectionMode::Prepend), "YX");
}

#[test]
fn section_output_is_captured() {
    setup();
    vista::bind("captured", |s| {
        s.echo("before ")?;
        s.section("hidden")?;
        s.echo("inside")?;
        s.end_section()?;
        s.echo("after")
    });

    let mut view = vista::view(Some("captured"), ()).unwrap();
    assert_eq!(view.render().unwrap(), "before after");
    assert_eq!(view.get_section("hidden", "none"), "inside");
    assert_eq!(view.get_section("other", "none"), "none");
}

#[test]
fn end_without_section() {
    setup();
    vista::bind("end", |s| s.end_section());

    let err = vista::view(Some("end"), ()).unwrap().render().unwrap_err();
    assert!(matches!(err, Error::Logic(_)));
}

#[test]
fn nested_section() {
    setup();
    vista::bind("nested", |s| {
        s.section("a")?;
        s.section("b")?;
        s.end_section()?;
        s.end_section()
    });

    let err = vista::view(Some("nested"), ()).unwrap().render().unwrap_err();
    assert!(matches!(&err, Error::Logic(msg) if msg.contains("sections do not nest")));
}

#[test]
fn unclosed_section() {
    setup();
    vista::bind("unclosed", |s| {
        s.echo("x")?;
        s.section("a")
    });

    let mut view = vista::view(Some("unclosed"), ()).unwrap();
    let err = view.render().unwrap_err();
    assert!(matches!(&err, Error::Logic(msg) if msg == "section `a` was never closed"));
    assert_eq!(view.content(), "");
}
