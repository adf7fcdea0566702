#![forbid(unsafe_code)]

//! Text, Avatar, Amount, and Time.

use chrono::Utc;
use unicode_segmentation::UnicodeSegmentation;
use vitrine_schema::format::{
    format_amount_plain, format_currency, format_date, format_date_short, format_relative,
    format_time_of_day,
};
use vitrine_schema::{TextTag, TimeFormat, WidgetNode};

use super::apply_common;
use crate::output::{Element, Output};
use crate::registry::{RenderError, WidgetImpl};
use crate::renderer::RenderContext;

pub struct TextWidget;

impl WidgetImpl for TextWidget {
    fn render(&self, node: &WidgetNode, _ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::Text(props) = node else {
            return Err(RenderError::wrong_node("Text", node.type_name()));
        };
        let mut el = Element::new(props.as_tag.unwrap_or(TextTag::Span).as_str());
        apply_common(&mut el, &props.common);
        if let Some(size) = props.size {
            el.set_attr("data-size", size.as_str());
        }
        if let Some(weight) = props.weight {
            el.set_attr("data-weight", weight.as_str());
        }
        if let Some(color) = props.color {
            el.set_attr("data-color", color.as_str());
        }
        if props.emphasis == Some(true) {
            el.set_attr("data-emphasis", "true");
        }
        if props.truncate == Some(true) {
            el.set_attr("data-truncate", "true");
        }
        el.push(Output::text(&props.value));
        Ok(el.into())
    }
}

pub struct AvatarWidget;

impl WidgetImpl for AvatarWidget {
    fn render(&self, node: &WidgetNode, _ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::Avatar(props) = node else {
            return Err(RenderError::wrong_node("Avatar", node.type_name()));
        };
        let mut el = Element::new("avatar");
        apply_common(&mut el, &props.common);
        if let Some(size) = props.size {
            el.set_attr("data-size", size.as_str());
        }
        if let Some(shape) = props.shape {
            el.set_attr("data-shape", shape.as_str());
        }
        if let Some(src) = &props.src {
            el.set_attr("src", src);
        } else if let Some(fallback) = &props.fallback {
            el.push(Output::text(initials(fallback)));
        }
        Ok(el.into())
    }
}

/// First grapheme of up to two words, uppercased — grapheme-aware so
/// names outside ASCII keep their first letter intact.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.graphemes(true).next())
        .flat_map(|grapheme| grapheme.chars().flat_map(char::to_uppercase))
        .collect()
}

pub struct AmountWidget;

impl WidgetImpl for AmountWidget {
    fn render(&self, node: &WidgetNode, _ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::Amount(props) = node else {
            return Err(RenderError::wrong_node("Amount", node.type_name()));
        };
        let mut el = Element::new("amount");
        apply_common(&mut el, &props.common);
        if let Some(size) = props.size {
            el.set_attr("data-size", size.as_str());
        }
        if let Some(weight) = props.weight {
            el.set_attr("data-weight", weight.as_str());
        }
        if let Some(color) = props.color {
            el.set_attr("data-color", color.as_str());
        }
        let show_currency = props.show_currency.unwrap_or(true);
        let formatted = match (&props.currency, show_currency) {
            (Some(currency), true) => {
                el.set_attr("data-currency", currency);
                format_currency(props.value, currency)
            }
            _ => format_amount_plain(props.value),
        };
        el.push(Output::text(formatted));
        Ok(el.into())
    }
}

pub struct TimeWidget;

impl WidgetImpl for TimeWidget {
    fn render(&self, node: &WidgetNode, _ctx: &RenderContext<'_>) -> Result<Output, RenderError> {
        let WidgetNode::Time(props) = node else {
            return Err(RenderError::wrong_node("Time", node.type_name()));
        };
        let mut el = Element::new("time");
        apply_common(&mut el, &props.common);
        let format = props.format.unwrap_or(TimeFormat::Relative);
        el.set_attr("data-format", format.as_str());
        el.set_attr("datetime", &props.value);
        if let Some(size) = props.size {
            el.set_attr("data-size", size.as_str());
        }
        if let Some(color) = props.color {
            el.set_attr("data-color", color.as_str());
        }
        let formatted = match format {
            TimeFormat::Relative => format_relative(&props.value, Utc::now()),
            TimeFormat::Absolute => format_date(&props.value),
            TimeFormat::Time => format_time_of_day(&props.value),
            TimeFormat::Date => format_date_short(&props.value),
        };
        // An unparseable timestamp degrades to the raw string.
        el.push(Output::text(
            formatted.unwrap_or_else(|_| props.value.clone()),
        ));
        Ok(el.into())
    }
}

#[cfg(test)]
mod tests {
    use super::initials;
    use crate::output::Output;
    use crate::registry::Registry;
    use crate::renderer::Renderer;
    use vitrine_schema::{
        AmountProps, AvatarProps, TextProps, TextTag, TimeFormat, TimeProps, WidgetNode,
    };

    fn render(node: WidgetNode) -> Output {
        let registry = Registry::with_builtins();
        Renderer::new(&registry).render(&node)
    }

    #[test]
    fn text_tag_hint_becomes_the_tag() {
        let Output::Element(el) = render(TextProps::new("Title").as_tag(TextTag::H2).into())
        else {
            panic!("expected element");
        };
        assert_eq!(el.tag, "h2");
        assert_eq!(el.text_content(), "Title");
        let Output::Element(el) = render(TextProps::new("plain").into()) else {
            panic!("expected element");
        };
        assert_eq!(el.tag, "span");
    }

    #[test]
    fn amount_formats_currency_by_default() {
        let Output::Element(el) = render(AmountProps::new(150_000.0).currency("NGN").into())
        else {
            panic!("expected element");
        };
        assert_eq!(el.text_content(), "\u{20a6}150,000");
        assert_eq!(el.attrs.get("data-currency").map(String::as_str), Some("NGN"));
    }

    #[test]
    fn amount_hides_currency_when_asked() {
        let node = AmountProps::new(155_000.0)
            .currency("NGN")
            .show_currency(false);
        let Output::Element(el) = render(node.into()) else {
            panic!("expected element");
        };
        assert_eq!(el.text_content(), "155,000");
        assert!(!el.attrs.contains_key("data-currency"));
    }

    #[test]
    fn time_absolute_formats_and_keeps_raw_datetime() {
        let node = TimeProps::new("2026-03-05T14:30:00Z").format(TimeFormat::Absolute);
        let Output::Element(el) = render(node.into()) else {
            panic!("expected element");
        };
        assert_eq!(el.text_content(), "Mar 5, 2026, 02:30 PM");
        assert_eq!(
            el.attrs.get("datetime").map(String::as_str),
            Some("2026-03-05T14:30:00Z")
        );
    }

    #[test]
    fn time_degrades_to_raw_value_on_parse_failure() {
        let node = TimeProps::new("soonish").format(TimeFormat::Date);
        let Output::Element(el) = render(node.into()) else {
            panic!("expected element");
        };
        assert_eq!(el.text_content(), "soonish");
    }

    #[test]
    fn avatar_initials_are_grapheme_aware() {
        assert_eq!(initials("Ada Obi"), "AO");
        assert_eq!(initials("chioma"), "C");
        assert_eq!(initials("Édith Piaf"), "ÉP");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn avatar_prefers_src_over_initials() {
        let node = AvatarProps::new().src("https://cdn/x.png").fallback("Ada Obi");
        let Output::Element(el) = render(node.into()) else {
            panic!("expected element");
        };
        assert_eq!(el.attrs.get("src").map(String::as_str), Some("https://cdn/x.png"));
        assert_eq!(el.text_content(), "");
    }
}
