// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::{Emitter, SourceBuf, GENERATED_HEADER};
use crate::types::{AccessorSet, Container, GeneratedType};

/// Kotlin source: one `object` holding a nested class per type.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinEmitter;

impl Emitter for KotlinEmitter {
    fn render(&self, container: &Container) -> String {
        let mut buf = SourceBuf::new();
        buf.line(0, GENERATED_HEADER);
        buf.blank();
        if !container.package.is_empty() {
            buf.line(0, &format!("package {}", container.package));
            buf.blank();
        }

        buf.line(0, &format!("object {} {{", container.name));
        for (i, generated) in container.types.iter().enumerate() {
            if i > 0 {
                buf.blank();
            }
            render_type(&mut buf, generated);
        }
        buf.line(0, "}");
        buf.finish()
    }

    fn extension(&self) -> &'static str {
        "kt"
    }
}

fn render_type(buf: &mut SourceBuf, generated: &GeneratedType) {
    let declaration = &generated.declaration;
    buf.line(
        1,
        &format!(
            "class {} : {} {{",
            declaration.type_name, declaration.interface
        ),
    );

    match &generated.accessors {
        AccessorSet::Direct { name, literal } => {
            buf.line(
                2,
                &format!("override fun {}(): String = \"{}\"", name, literal.literal),
            );
        }
        AccessorSet::Chunked { name, parts } => {
            for part in parts {
                buf.line(
                    2,
                    &format!(
                        "private fun {}(): String = \"{}\"",
                        part.name, part.literal.literal
                    ),
                );
            }
            buf.blank();

            let calls: Vec<String> = parts.iter().map(|p| format!("{}()", p.name)).collect();
            buf.line(
                2,
                &format!("override fun {}(): String = {}", name, calls.join(" + ")),
            );
        }
    }

    buf.line(1, "}");
}
