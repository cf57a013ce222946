//! Typed attribute values.
//!
//! Every attribute is a type implementing [`Attribute`], which knows its markup name and how to
//! write its value. [`AppliesTo`] records which tags accept the attribute, so that
//! [`Element::set`](crate::Element::set) rejects mismatches at compile time.

use crate::tags::TagSchema;

pub use self::value::{AttrValue, Color, Length, LengthUnit, Paint};

/// Generates one tuple struct per attribute around an [`AttrValue`].
macro_rules! newtype_attributes {
    ($(
        $(#[$meta:meta])*
        $ty:ident($name:literal): $inner:ty;
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $ty(pub $inner);

        impl $crate::attribute::Attribute for $ty {
            const NAME: &'static str = $name;

            #[inline]
            fn write_value(&self, out: &mut String) {
                $crate::attribute::AttrValue::write(&self.0, out);
            }
        }
    )*};
}

/// Generates keyword enums. Those given a markup name in parentheses are attributes themselves,
/// the others only appear inside other attribute values.
macro_rules! keywords {
    ($(
        $(#[$meta:meta])*
        $ty:ident $(($name:literal))? {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),* $(,)?
        }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::strum_macros::IntoStaticStr)]
        pub enum $ty {
            $(
                $(#[$vmeta])*
                #[strum(serialize = $value)]
                $variant,
            )*
        }

        impl $crate::attribute::AttrValue for $ty {
            #[inline]
            fn write(&self, out: &mut String) {
                out.push_str(<&'static str>::from(*self));
            }
        }

        $(
            impl $crate::attribute::Attribute for $ty {
                const NAME: &'static str = $name;

                #[inline]
                fn write_value(&self, out: &mut String) {
                    out.push_str(<&'static str>::from(*self));
                }
            }
        )?
    )*};
}

/// `applies_to! { Attr => TagA, TagB; }`
macro_rules! applies_to {
    ($( $attr:ty => $($tag:ident),+ ; )*) => {
        $( $( impl $crate::attribute::AppliesTo<$tag> for $attr {} )+ )*
    };
}

mod mathml;
mod path;
mod svg;
mod value;

pub use self::mathml::*;
pub use self::path::{PathCommand, PathData};
pub use self::svg::*;

/// An attribute with a fixed markup name.
pub trait Attribute {
    const NAME: &'static str;

    fn write_value(&self, out: &mut String);

    fn value(&self) -> String {
        let mut out = String::new();
        self.write_value(&mut out);
        out
    }
}

/// Marks `Self` as an attribute recognized on tag `T`.
pub trait AppliesTo<T: TagSchema>: Attribute {}
