use attrmark::{render_markup as resolve, Run, Style};
use attrmark_render::{render_markup, render_runs, OutputMode, RenderOptions};
use proptest::prelude::*;

const SAMPLE: &str = r##"<h1>Report</h1><br/><b>3</b> items <font color="#FF0000">failed</font>"##;

#[test]
fn test_output_modes() {
    let text = render_markup(SAMPLE, &RenderOptions::new(OutputMode::Text)).unwrap();
    assert_eq!(text, "Report \n3 items failed ");

    let term = render_markup(SAMPLE, &RenderOptions::new(OutputMode::Term)).unwrap();
    assert!(term.contains("\x1b[1m"));
    assert!(term.contains("\x1b[38;5;196m"));
    assert!(term.contains("failed"));

    let debug = render_markup(SAMPLE, &RenderOptions::new(OutputMode::TermDebug)).unwrap();
    assert_eq!(
        debug,
        "[largeTitle block]Report [/]\n[bold]3 [/]items [#ff0000ff]failed [/]"
    );
}

#[test]
fn test_json_output_lists_runs() {
    let json = render_markup("<i>a</i>b", &RenderOptions::new(OutputMode::Json)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "text": "a ", "style": { "italic": true } },
            { "text": "b ", "style": {} }
        ])
    );
}

#[test]
fn test_coalesce_option() {
    let runs = resolve("<b>a</b><b>b</b>");
    let debug = RenderOptions::new(OutputMode::TermDebug);

    assert_eq!(render_runs(&runs, &debug).unwrap(), "[bold]a b [/]");
    assert_eq!(
        render_runs(&runs, &debug.coalesce(false)).unwrap(),
        "[bold]a [/][bold]b [/]"
    );
}

#[test]
fn test_styles_do_not_span_line_breaks() {
    let term = render_markup("<b>a<br/>b</b>", &RenderOptions::new(OutputMode::Term)).unwrap();
    let lines: Vec<&str> = term.split('\n').collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        assert!(line.starts_with("\x1b[1m"));
        assert!(line.ends_with("\x1b[0m"));
    }

    let json = render_markup("<b>a<br/>b</b>", &RenderOptions::new(OutputMode::Json)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(3));
    assert_eq!(
        value[1],
        serde_json::json!({ "text": "\n", "style": { "weight": "bold" } })
    );
}

#[test]
fn test_width_truncates_each_line() {
    let options = RenderOptions::new(OutputMode::Text).width(5);
    let out = render_markup("a long first line<br/>ok", &options).unwrap();
    assert_eq!(out, "a lo…\nok ");
}

#[test]
fn test_nested_styles_emit_single_escape_per_run() {
    let out = render_markup("<b><u>x</u></b>", &RenderOptions::new(OutputMode::Term)).unwrap();
    // One run, so one styled segment followed by one reset.
    assert_eq!(out.matches("\x1b[0m").count(), 1);
}

#[test]
fn test_empty_input() {
    let out = render_runs(&[], &RenderOptions::new(OutputMode::Term)).unwrap();
    assert_eq!(out, "");
    let out = render_runs(&[Run::new("\n", Style::default())], &RenderOptions::default()).unwrap();
    assert_eq!(out, "\n");
}

proptest! {
    #[test]
    fn text_mode_is_concatenated_run_text(input in "[a-z<>/&; ]{0,40}") {
        let runs = resolve(&input);
        let expected: String = runs.iter().map(|r| r.text.as_str()).collect();
        let out = render_runs(&runs, &RenderOptions::new(OutputMode::Text)).unwrap();
        prop_assert_eq!(out, expected);
    }
}
