//! Per-field row renderers
//!
//! Each renderer turns one field into a `<tr>` with a `<th>` label cell and a
//! `<td>` control cell. All text from the field is escaped; numeric option
//! values are written as bare decimal tokens.

use formtable_fields::{ChoiceKind, ChoiceOption, Field, SelectOption, TextKind};
use tracing::trace;

use crate::escape::escape_html;

/// Wrap a label and an already-built control in the shared row frame.
fn row(label: &str, control: &str) -> String {
    format!(
        "
    <tr>
      <th>
        {label}
      </th>
      <td>
        {control}
      </td>
    </tr>
  ",
        label = escape_html(label),
    )
}

/// Single-line `<input>`; a missing placeholder becomes an empty attribute.
pub fn render_text_row(
    name: &str,
    label: &str,
    input_type: TextKind,
    placeholder: Option<&str>,
) -> String {
    let control = format!(
        r#"<input type="{}" placeholder="{}" name="{}" />"#,
        escape_html(input_type.as_str()),
        escape_html(placeholder.unwrap_or_default()),
        escape_html(name),
    );
    row(label, &control)
}

/// One `<input>` plus its `<label>` for each option, concatenated.
///
/// The option value is both the input `id` and the label `for`.
pub fn render_buttons(input_type: ChoiceKind, name: &str, values: &[ChoiceOption]) -> String {
    let input_type = escape_html(input_type.as_str());
    let name = escape_html(name);
    values
        .iter()
        .map(|option| {
            format!(
                r#"
    <input type="{input_type}" id="{value}" name="{name}">
    <label for="{value}">{label}</label>
  "#,
                value = option.value,
                label = escape_html(&option.label),
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Radio or checkbox group row.
pub fn render_choice_row(
    name: &str,
    label: &str,
    input_type: ChoiceKind,
    values: &[ChoiceOption],
) -> String {
    row(label, &render_buttons(input_type, name, values))
}

/// `<option>` elements for a select box, concatenated.
pub fn render_options(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|option| {
            format!(
                "<option value={}>{}</option>",
                option.value,
                escape_html(&option.text)
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

pub fn render_select_row(name: &str, label: &str, options: &[SelectOption]) -> String {
    let control = format!(
        r#"<select name="{}">
          {}
        </select>"#,
        escape_html(name),
        render_options(options),
    );
    row(label, &control)
}

/// `<textarea>` whose body is the placeholder text.
pub fn render_textarea_row(name: &str, label: &str, placeholder: Option<&str>) -> String {
    let control = format!(
        r#"<textarea name="{}">{}</textarea>"#,
        escape_html(name),
        escape_html(placeholder.unwrap_or_default()),
    );
    row(label, &control)
}

/// Render one field as a table row, dispatching on its kind.
pub fn render_row(field: &Field) -> String {
    trace!(name = field.name(), kind = %field.kind(), "rendering row");
    match field {
        Field::TextInput {
            name,
            label,
            input_type,
            placeholder,
        } => render_text_row(name, label, *input_type, placeholder.as_deref()),
        Field::ChoiceInput {
            name,
            label,
            input_type,
            values,
        } => render_choice_row(name, label, *input_type, values),
        Field::SelectField {
            name,
            label,
            options,
        } => render_select_row(name, label, options),
        Field::TextAreaField {
            name,
            label,
            placeholder,
        } => render_textarea_row(name, label, placeholder.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, u32)]) -> Vec<ChoiceOption> {
        pairs
            .iter()
            .map(|(label, value)| ChoiceOption {
                label: (*label).into(),
                value: *value,
            })
            .collect()
    }

    #[test]
    fn test_email_input_without_placeholder() {
        let html = render_row(&Field::TextInput {
            name: "email".into(),
            label: "メールアドレス".into(),
            input_type: TextKind::Email,
            placeholder: None,
        });
        assert!(html.contains(r#"<input type="email" placeholder="" name="email" />"#));
        assert!(html.contains("メールアドレス"));
    }

    #[test]
    fn test_text_row_frame() {
        let html = render_text_row("name", "お名前", TextKind::Text, Some("例）山田　太郎"));
        assert_eq!(
            html,
            r#"
    <tr>
      <th>
        お名前
      </th>
      <td>
        <input type="text" placeholder="例）山田　太郎" name="name" />
      </td>
    </tr>
  "#
        );
    }

    #[test]
    fn test_text_row_escapes_everything() {
        let html = render_text_row(
            "a\"b",
            "<b>Label</b>",
            TextKind::Tel,
            Some("\" onfocus=\"alert(1)"),
        );
        assert!(html.contains("&lt;b&gt;Label&lt;/b&gt;"));
        assert!(html.contains(r#"placeholder="&quot; onfocus=&quot;alert(1)""#));
        assert!(html.contains(r#"name="a&quot;b""#));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_two_buttons_pair_inputs_with_labels() {
        let html = render_buttons(
            ChoiceKind::Radio,
            "contact",
            &options(&[("メール", 0), ("電話", 1)]),
        );
        assert_eq!(html.matches("<input ").count(), 2);
        assert_eq!(html.matches("<label ").count(), 2);
        assert!(html.contains(r#"<input type="radio" id="0" name="contact">"#));
        assert!(html.contains(r#"<label for="0">メール</label>"#));
        assert!(html.contains(r#"<input type="radio" id="1" name="contact">"#));
        assert!(html.contains(r#"<label for="1">電話</label>"#));
        // Fragments are joined without a separator.
        assert!(!html.contains(","));
        assert_eq!(
            html,
            concat!(
                "\n    <input type=\"radio\" id=\"0\" name=\"contact\">",
                "\n    <label for=\"0\">メール</label>\n  ",
                "\n    <input type=\"radio\" id=\"1\" name=\"contact\">",
                "\n    <label for=\"1\">電話</label>\n  ",
            )
        );
    }

    #[test]
    fn test_checkbox_row_escapes_option_labels() {
        let html = render_choice_row(
            "time",
            "時間帯",
            ChoiceKind::Checkbox,
            &options(&[("<9:00>", 7)]),
        );
        assert!(html.contains(r#"<input type="checkbox" id="7" name="time">"#));
        assert!(html.contains(r#"<label for="7">&lt;9:00&gt;</label>"#));
    }

    #[test]
    fn test_select_row() {
        let html = render_row(&Field::SelectField {
            name: "inquiry_kind".into(),
            label: "お問い合せの種類".into(),
            options: vec![
                SelectOption {
                    text: "返品について".into(),
                    value: 0,
                },
                SelectOption {
                    text: "R&D".into(),
                    value: 1,
                },
            ],
        });
        assert!(html.contains(r#"<select name="inquiry_kind">"#));
        assert!(html.contains(
            "<option value=0>返品について</option><option value=1>R&amp;D</option>"
        ));
        assert!(html.contains("</select>"));
    }

    #[test]
    fn test_textarea_placeholder_is_body_text() {
        let html = render_row(&Field::TextAreaField {
            name: "inquiry_detail".into(),
            label: "お問い合せ内容".into(),
            placeholder: Some("</textarea><script>".into()),
        });
        assert!(html.contains(
            r#"<textarea name="inquiry_detail">&lt;/textarea&gt;&lt;script&gt;</textarea>"#
        ));
        assert!(!html.contains("placeholder="));
    }

    #[test]
    fn test_textarea_without_placeholder_is_empty() {
        let html = render_textarea_row("note", "Note", None);
        assert!(html.contains(r#"<textarea name="note"></textarea>"#));
    }

    #[test]
    fn test_every_row_is_one_tr() {
        for field in formtable_fields::contact_form_fields() {
            let html = render_row(&field);
            assert_eq!(html.matches("<tr>").count(), 1, "{}", field.name());
            assert_eq!(html.matches("</tr>").count(), 1, "{}", field.name());
            assert!(html.contains("<th>") && html.contains("<td>"));
        }
    }
}
