#[macro_use]
mod common;
use equate::case::{Case, CaseDescriptor};
use equate::cases::{DEFAULT_ORDER, library};
use equate::pipeline::Pipeline;
use equate::value::Value;
use equate::{Error, Options, default_pipeline, parse};

#[test]
fn options_must_be_objects() {
    let (a, b) = (parse!("1"), parse!("1"));
    assert_eq!(equate::equals_with(&a, &b, None), Ok(true));
    assert_eq!(equate::equals_with(&a, &b, Some(&Value::Undefined)), Ok(true));
    assert_eq!(equate::equals_with(&a, &b, Some(&Value::Null)), Ok(true));
    assert_eq!(
        equate::equals_with(&a, &b, Some(&parse!("1"))),
        Err(Error::InvalidOptions("number"))
    );
    assert_eq!(
        equate::equals_with(&a, &b, Some(&parse!("Symbol()"))),
        Err(Error::InvalidOptions("symbol"))
    );
    assert_eq!(
        equate::equals_with(&a, &b, Some(&parse!("function options() {}"))),
        Err(Error::InvalidOptions("function"))
    );
    assert_eq!(
        Error::InvalidOptions("number").to_string(),
        "options must be an object, but got number"
    );
}

#[test]
fn option_flags_are_truthy() {
    equal!["{ deep: 1 }";
        "[[1]]" => "[[1]]"
    ];
    unequal!["{ deep: '' }";
        "[[1]]" => "[[1]]"
    ];
    equal!["{ loose: 'yes' }";
        "1" => "'1'"
    ];
    unequal!["{ deep: true, depth: -1 }";
        "[[[[[[[[[[[[1]]]]]]]]]]]]" => "[[[[[[[[[[[[1]]]]]]]]]]]]"
    ];
    equal!["{ deep: true, depth: -1 }";
        "[[[1]]]" => "[[[1]]]"
    ];
}

#[test]
fn library_is_read_only_lookup() {
    assert_eq!(library().len(), 23);
    assert!(library().contains_key("weak_ref"));
    let names: Vec<&str> = default_pipeline().names().into_iter().flatten().collect();
    assert_eq!(names, DEFAULT_ORDER);
}

#[test]
fn custom_pipeline_from_library() {
    // a pipeline without the prototype and array cases treats arrays as
    // plain objects, which have no keys
    let pipeline = Pipeline::from_names(&["identity", "null", "not_object", "object"]).unwrap();
    let options = Options::default();
    assert!(pipeline.equals(&parse!("[1]"), &parse!("[2]"), &options));
    assert!(pipeline.equals(&parse!("[]"), &parse!("{}"), &options));
    assert!(!pipeline.equals(&parse!("1"), &parse!("2"), &options));
    assert!(!default_pipeline().equals(&parse!("[1]"), &parse!("[2]"), &options));

    assert_eq!(
        Pipeline::from_names(&["identity", "regex"]).unwrap_err(),
        Error::UnknownCase("regex".into())
    );
}

#[test]
fn custom_cases() {
    fn strings(a: &Value, b: &Value, _: &Options) -> bool {
        a.as_str().is_some() && b.as_str().is_some()
    }
    fn ignore_case(a: &Value, b: &Value, _: &Options, _: &Pipeline) -> bool {
        match (a.as_str(), b.as_str()) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }
    let case = Case::with_descriptor(
        strings,
        ignore_case,
        CaseDescriptor::new("ignore_case", &[], None).unwrap(),
    );
    let mut cases = vec![case];
    cases.extend(default_pipeline().cases().iter().cloned());
    let pipeline = Pipeline::new(cases);

    let options = Options::new().deep(true);
    assert!(pipeline.equals(&parse!("'ABC'"), &parse!("'abc'"), &options));
    assert!(pipeline.equals(&parse!("{ a: ['X'] }"), &parse!("{ a: ['x'] }"), &options));
    assert!(!default_pipeline().equals(&parse!("{ a: ['X'] }"), &parse!("{ a: ['x'] }"), &options));
    assert_eq!(pipeline.names().first(), Some(&Some("ignore_case")));
}

#[test]
fn case_construction_errors() {
    assert_eq!(
        CaseDescriptor::new(" ", &[], None).unwrap_err(),
        Error::InvalidCaseName
    );
    assert_eq!(
        CaseDescriptor::new("tolerant", &["tolerance", "tolerance"], None).unwrap_err(),
        Error::DuplicateCaseOption("tolerance".into(), "tolerant".into())
    );
}

#[test]
fn extra_options_reach_custom_cases() {
    fn numbers(a: &Value, b: &Value, _: &Options) -> bool {
        a.as_number().is_some() && b.as_number().is_some()
    }
    fn within_tolerance(a: &Value, b: &Value, options: &Options, _: &Pipeline) -> bool {
        let tolerance = options
            .extra
            .get("tolerance")
            .and_then(Value::as_number)
            .unwrap_or(0.0);
        match (a.as_number(), b.as_number()) {
            (Some(a), Some(b)) => (a - b).abs() <= tolerance,
            _ => false,
        }
    }
    let case = Case::with_descriptor(
        numbers,
        within_tolerance,
        CaseDescriptor::new("tolerance", &["tolerance"], None).unwrap(),
    );
    let mut cases = vec![case];
    cases.extend(default_pipeline().cases().iter().cloned());
    let pipeline = Pipeline::new(cases);

    let options = parse!("{ deep: true, tolerance: 0.5 }");
    assert_eq!(
        pipeline.equals_with(&parse!("[1, 2]"), &parse!("[1.25, 2.5]"), Some(&options)),
        Ok(true)
    );
    assert_eq!(
        pipeline.equals_with(&parse!("[1, 2]"), &parse!("[1.25, 2.75]"), Some(&options)),
        Ok(false)
    );
}
