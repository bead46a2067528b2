//! Type formatting for log output and test failures.
//!
//! Named, struct and interface types print by name, so formatting a
//! self-referential type always terminates.

use crate::{Idx, Pool, TypeData};

impl Pool {
    /// Format a type as a human-readable string.
    pub fn format_type(&self, idx: Idx) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, idx: Idx, buf: &mut String) {
        let Some(data) = self.get(idx) else {
            buf.push_str(if idx.is_none() { "<none>" } else { "<invalid>" });
            return;
        };

        match data {
            TypeData::Scalar(kind) => buf.push_str(kind.name()),
            TypeData::Struct { name, .. }
            | TypeData::Interface { name, .. }
            | TypeData::Named { name, .. } => buf.push_str(name),

            TypeData::Pointer(elem) => {
                buf.push('*');
                self.format_type_into(*elem, buf);
            }
            TypeData::Slice(elem) => {
                buf.push_str("[]");
                self.format_type_into(*elem, buf);
            }
            TypeData::Array { len, elem } => {
                buf.push('[');
                buf.push_str(&len.to_string());
                buf.push(']');
                self.format_type_into(*elem, buf);
            }
            TypeData::Chan { dir, elem } => {
                buf.push_str(dir.prefix());
                self.format_type_into(*elem, buf);
            }
            TypeData::Map { key, value } => {
                buf.push_str("map[");
                self.format_type_into(*key, buf);
                buf.push(']');
                self.format_type_into(*value, buf);
            }

            TypeData::Func { params, results } => {
                buf.push_str("func");
                self.format_list_into(params, buf);
                match &results[..] {
                    [] => {}
                    [single] => {
                        buf.push(' ');
                        self.format_type_into(*single, buf);
                    }
                    many => {
                        buf.push(' ');
                        self.format_list_into(many, buf);
                    }
                }
            }
        }
    }

    /// Format `(a, b, c)`.
    fn format_list_into(&self, list: &[Idx], buf: &mut String) {
        buf.push('(');
        for (i, &ty) in list.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            self.format_type_into(ty, buf);
        }
        buf.push(')');
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
