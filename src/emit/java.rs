// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::{Emitter, SourceBuf, GENERATED_HEADER};
use crate::types::{AccessorSet, Container, GeneratedType};

/// Java source: one final holder class with a static nested class per type.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaEmitter;

impl Emitter for JavaEmitter {
    fn render(&self, container: &Container) -> String {
        let mut buf = SourceBuf::new();
        buf.line(0, GENERATED_HEADER);
        buf.blank();
        if !container.package.is_empty() {
            buf.line(0, &format!("package {};", container.package));
            buf.blank();
        }

        buf.line(0, &format!("public final class {} {{", container.name));
        buf.line(1, &format!("private {}() {{", container.name));
        buf.line(1, "}");

        for generated in &container.types {
            buf.blank();
            render_type(&mut buf, generated);
        }

        buf.line(0, "}");
        buf.finish()
    }

    fn extension(&self) -> &'static str {
        "java"
    }
}

fn render_type(buf: &mut SourceBuf, generated: &GeneratedType) {
    let declaration = &generated.declaration;
    buf.line(
        1,
        &format!(
            "public static final class {} implements {} {{",
            declaration.type_name, declaration.interface
        ),
    );

    match &generated.accessors {
        AccessorSet::Direct { name, literal } => {
            buf.line(2, "@Override");
            buf.line(2, &format!("public String {}() {{", name));
            buf.line(3, &format!("return \"{}\";", literal.literal));
            buf.line(2, "}");
        }
        AccessorSet::Chunked { name, parts } => {
            for part in parts {
                buf.line(2, &format!("private String {}() {{", part.name));
                buf.line(3, &format!("return \"{}\";", part.literal.literal));
                buf.line(2, "}");
                buf.blank();
            }

            let calls: Vec<String> = parts.iter().map(|p| format!("{}()", p.name)).collect();
            buf.line(2, "@Override");
            buf.line(2, &format!("public String {}() {{", name));
            buf.line(3, &format!("return {};", calls.join(" + ")));
            buf.line(2, "}");
        }
    }

    buf.line(1, "}");
}
