#![forbid(unsafe_code)]

//! Style token enums shared across the node model.
//!
//! Every token serializes as its fixed wire string and can be parsed back
//! with `parse`. The allowed wire strings are exposed as `ALLOWED` so the
//! validator can report the full set when it rejects a value.

/// Define a closed token enum with fixed wire strings.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Wire strings accepted for this token.
            pub const ALLOWED: &'static [&'static str] = &[$($wire),+];

            /// The token's wire string.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Parse a wire string, returning `None` for anything outside
            /// the allowed set.
            #[must_use]
            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

token_enum! {
    /// Spacing scale used by `Row`, `Col`, `Divider`, and the list
    /// patterns.
    Gap { None => "none", Sm => "sm", Md => "md", Lg => "lg" }
}

token_enum! {
    /// Main-axis alignment for `Row` and `Col`.
    Align {
        Start => "start",
        Center => "center",
        End => "end",
        Between => "between",
        Stretch => "stretch",
    }
}

token_enum! {
    /// Type scale for `Text` and `Amount`.
    TextSize { Xs => "xs", Sm => "sm", Md => "md", Lg => "lg", Xl => "xl" }
}

token_enum! {
    /// Font weight for `Text` and `Amount`.
    FontWeight {
        Regular => "regular",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
    }
}

token_enum! {
    /// Full text color palette.
    TextColor {
        Default => "default",
        Secondary => "secondary",
        Emphasis => "emphasis",
        Muted => "muted",
        Danger => "danger",
        Success => "success",
        Warning => "warning",
    }
}

token_enum! {
    /// Reduced tone palette used by `Amount`.
    ToneColor {
        Default => "default",
        Success => "success",
        Danger => "danger",
        Warning => "warning",
    }
}

token_enum! {
    /// Display mode for `Time` values.
    TimeFormat {
        Relative => "relative",
        Absolute => "absolute",
        Time => "time",
        Date => "date",
    }
}

token_enum! {
    /// Reduced color palette used by `Time`.
    TimeColor { Default => "default", Secondary => "secondary", Muted => "muted" }
}

token_enum! {
    /// Reduced type scale used by `Time`.
    TimeSize { Xs => "xs", Sm => "sm", Md => "md" }
}

token_enum! {
    /// Output tag hint for `Text`.
    TextTag {
        Span => "span",
        P => "p",
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
    }
}

token_enum! {
    /// Button visual variant.
    ButtonVariant { Outline => "outline", Solid => "solid" }
}

token_enum! {
    /// Control size shared by `Button` and `Avatar`.
    ControlSize { Sm => "sm", Md => "md", Lg => "lg" }
}

token_enum! {
    /// Avatar size scale.
    AvatarSize { Sm => "sm", Md => "md", Lg => "lg" }
}

token_enum! {
    /// Avatar silhouette.
    AvatarShape { Circle => "circle", Square => "square" }
}

token_enum! {
    /// Icon placement relative to a button label.
    IconPosition { Left => "left", Right => "right" }
}

token_enum! {
    /// Divider orientation.
    Orientation { Horizontal => "horizontal", Vertical => "vertical" }
}

token_enum! {
    /// Button group placement.
    GroupPosition { Static => "static", Absolute => "absolute" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip() {
        for &wire in Align::ALLOWED {
            let token = Align::parse(wire).expect("allowed wire string must parse");
            assert_eq!(token.as_str(), wire);
        }
    }

    #[test]
    fn unknown_wire_rejected() {
        assert_eq!(Gap::parse("xxl"), None);
        assert_eq!(TextColor::parse("Emphasis"), None);
    }

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&FontWeight::Semibold).unwrap();
        assert_eq!(json, "\"semibold\"");
    }
}
