//! Option structs for the tag constructors.
//!
//! Every field is an `Option`; unset fields are not written, so the renderer's default applies.
//! The associated functions on each struct are presets for common configurations.

use crate::attribute::Attribute;
use crate::tags::TagSchema;

/// A set of attributes to write on an element of tag `T`.
pub trait TagOptions<T: TagSchema> {
    fn attributes(&self) -> Vec<(&'static str, String)>;
}

#[inline]
pub(crate) fn push_attribute<A: Attribute>(
    attrs: &mut Vec<(&'static str, String)>,
    value: &Option<A>,
) {
    if let Some(value) = value {
        attrs.push((A::NAME, value.value()));
    }
}

/// Declares an options struct and implements [`TagOptions`] for each listed tag. The field types
/// must be attributes applying to every listed tag.
macro_rules! tag_options {
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident for $($tag:ident),+ { $($body:tt)* }
    )*) => {$(
        tag_options!(@struct $(#[$meta])* $name { $($body)* });
        tag_options!(@impls $name [$($tag)+] { $($body)* });
    )*};
    (@impls $name:ident [$($tag:ident)+] $fields:tt) => {
        $( tag_options!(@impl $name $tag $fields); )+
    };
    (@struct $(#[$meta:meta])* $name:ident {
        $( $(#[$fmeta:meta])* pub $field:ident: $fty:ty ),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: Option<$fty>, )*
        }
    };
    (@impl $name:ident $tag:ident {
        $( $(#[$fmeta:meta])* pub $field:ident: $fty:ty ),* $(,)?
    }) => {
        impl $crate::options::TagOptions<$tag> for $name {
            fn attributes(&self) -> Vec<(&'static str, String)> {
                let mut attrs = Vec::new();
                $( $crate::options::push_attribute(&mut attrs, &self.$field); )*
                attrs
            }
        }

        const _: fn() = || {
            fn applies<A: $crate::attribute::AppliesTo<$tag>>() {}
            $( applies::<$fty>(); )*
        };
    };
}

mod mathml;
mod svg;

pub use self::mathml::*;
pub use self::svg::*;

/// Writes no attributes. Accepted by every tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOptions;

impl<T: TagSchema> TagOptions<T> for NoOptions {
    #[inline]
    fn attributes(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Both option sets, the second one winning on conflicts.
impl<T: TagSchema, A: TagOptions<T>, B: TagOptions<T>> TagOptions<T> for (A, B) {
    fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = self.0.attributes();
        for (name, value) in self.1.attributes() {
            match attrs.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 = value,
                None => attrs.push((name, value)),
            }
        }
        attrs
    }
}
