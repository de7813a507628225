/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Declarative macros for the bibsort crates.

/// Generates a string-backed enum and its `as_str` method.
/// Preserves any doc comments and derive macros on the enum and its variants.
#[macro_export]
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $val:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            #[doc = "Returns the string value associated with this variant."]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $val, )+
                }
            }
        }
    }
}

// Key builder for embedded schemes and tests.

/// Builds a [`FullReferenceType`](crate::reference::FullReferenceType) key.
///
/// `full_type!(Book)` is a standalone type;
/// `full_type!(Contribution in BookEdited)` pairs a type with its container.
#[macro_export]
macro_rules! full_type {
    ($primary:ident in $parent:ident) => {
        $crate::reference::FullReferenceType::within(
            $crate::reference::ReferenceType::$primary,
            $crate::reference::ReferenceType::$parent,
        )
    };
    ($primary:ident) => {
        $crate::reference::FullReferenceType::standalone($crate::reference::ReferenceType::$primary)
    };
}
