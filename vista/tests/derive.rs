use pretty_assertions::assert_eq;
use vista::{Data, IntoData, Value};

#[derive(vista::Data)]
struct Page {
    title: String,
    #[data(rename = "userName")]
    user_name: &'static str,
    #[data(skip)]
    #[allow(dead_code)]
    cache: Vec<u8>,
    tags: Vec<&'static str>,
    r#type: i32,
}

#[derive(vista::Data)]
struct Empty;

#[test]
fn derive_into_data() {
    let page = Page {
        title: "Home".into(),
        user_name: "jane",
        cache: vec![1, 2],
        tags: vec!["a", "b"],
        r#type: 3,
    };

    assert_eq!(
        page.into_data(),
        Data::from([
            ("title", Value::from("Home")),
            ("userName", "jane".into()),
            ("tags", Value::list(["a", "b"])),
            ("type", 3.into()),
        ])
    );
    assert!(Empty.into_data().is_empty());
}

#[test]
fn with_derived_data() {
    vista::reset();
    vista::set_directory("/views");
    vista::bind("greet", |s| {
        let name = s.get("userName")?.clone();
        let title = s.get("title")?.clone();
        s.echo(title)?;
        s.echo(", ")?;
        s.echo(name)
    });

    let mut view = vista::view(Some("greet"), ()).unwrap();
    view.with_data(Page {
        title: "Hi".into(),
        user_name: "jane",
        cache: vec![],
        tags: vec![],
        r#type: 0,
    });
    assert_eq!(view.render().unwrap(), "Hi, jane");
}
