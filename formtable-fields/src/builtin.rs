//! The built-in contact form.

use crate::catalog::Catalog;
use crate::types::{ChoiceKind, ChoiceOption, Field, SelectOption, TextKind};

fn text(name: &str, label: &str, input_type: TextKind, placeholder: &str) -> Field {
    Field::TextInput {
        name: name.into(),
        label: label.into(),
        input_type,
        placeholder: Some(placeholder.into()),
    }
}

fn choices(labels: &[&str]) -> Vec<ChoiceOption> {
    labels
        .iter()
        .zip(0u32..)
        .map(|(label, value)| ChoiceOption {
            label: (*label).into(),
            value,
        })
        .collect()
}

fn options(texts: &[&str]) -> Vec<SelectOption> {
    texts
        .iter()
        .zip(0u32..)
        .map(|(text, value)| SelectOption {
            text: (*text).into(),
            value,
        })
        .collect()
}

/// The eight contact form fields, in display order.
pub fn contact_form_fields() -> Vec<Field> {
    vec![
        text("name", "お名前", TextKind::Text, "例）山田　太郎"),
        text(
            "email",
            "メールアドレス",
            TextKind::Email,
            "例）example@gmail.com",
        ),
        text("tel", "電話番号", TextKind::Tel, "例）080-1234-5678"),
        text(
            "address",
            "ご住所",
            TextKind::Text,
            "例）東京都千代田区丸の内1丁目9-2",
        ),
        Field::ChoiceInput {
            name: "contact".into(),
            label: "ご希望の返信方法".into(),
            input_type: ChoiceKind::Radio,
            values: choices(&["メール", "電話", "どちらでも可"]),
        },
        Field::ChoiceInput {
            name: "time".into(),
            label: "連絡可能な時間帯（電話）".into(),
            input_type: ChoiceKind::Checkbox,
            values: choices(&["09:00〜12:00", "13:00〜16:00", "16:00〜19:00"]),
        },
        Field::SelectField {
            name: "inquiry_kind".into(),
            label: "お問い合せの種類".into(),
            options: options(&["返品について", "発送について", "その他"]),
        },
        Field::TextAreaField {
            name: "inquiry_detail".into(),
            label: "お問い合せ内容".into(),
            placeholder: Some("例）お問い合わせ内容詳細をご記入ください".into()),
        },
    ]
}

impl Catalog {
    /// The built-in contact form catalog.
    pub fn contact_form() -> Self {
        Self::from_validated(contact_form_fields())
    }
}
