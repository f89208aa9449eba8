//! # fieldpath
//!
//! Expands compact field selections into flat, dotted field paths.
//!
//!     a.b.(c,d),h.i                   ->  a.b.c, a.b.d, h.i
//!     a.(b,c).d.(e,f)                 ->  a.b.d.e, a.b.d.f, a.c.d.e, a.c.d.f
//!     a.b{c=d;e=f}.(f,g).h            ->  a.b{c=d;e=f}.f.h, a.b{c=d;e=f}.g.h
//!
//! File Layout
//!
//!     src/fields
//!       ├── markers      Open / close / delimiter configuration
//!       ├── token        Marker-aware tokenizer
//!       ├── scanning     Group locator (prefix, alternatives, suffix)
//!       ├── expansion    Fixpoint rewrite loop
//!       ├── splitting    Final top-level split
//!       ├── parsing      Public entry points
//!       └── params       Reader for attached {key=value;...} blocks
//!
//! The usual entry point is [`fields::parse`] or [`fields::FieldsParser`].

pub mod fields;

pub use fields::{parse, parse_fields, FieldsParser, Markers};
