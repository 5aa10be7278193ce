//! JSON text generator.
//!
//! A recursive depth-first walk over a [`Value`] tree. Each level of nesting
//! adds one space of indentation; composites put every child on its own
//! line. The indentation is purely cosmetic — the grammar has no significant
//! whitespace, so the parser accepts the generator's output unchanged.
//!
//! Integer-kind numbers render without a decimal point and double-kind
//! numbers always with one, so the numeric representation survives a
//! serialize/parse round trip. Non-finite doubles are rejected: the grammar
//! never accepts `NaN`/`Infinity` tokens on input, and the generator refuses
//! to produce what the parser cannot read back.
//!
//! The generator is the last line of defense for the forbidden-character
//! invariant: a string payload containing a newline, carriage return,
//! backslash, or double quote cannot be represented (there is no escape
//! mechanism) and fails with a `Generate` error rather than emitting
//! unparseable text.

use crate::error::{JsonError, Result};
use crate::value::{Array, Number, Object, Value};

/// Serialize a value tree to JSON text. Succeeds for every tree built from
/// the public factories; failures indicate a payload the format cannot
/// represent.
pub fn serialize(value: &Value) -> Result<String> {
    let mut out = String::new();
    generate(value, 0, &mut out)?;
    Ok(out)
}

/// Emit exactly one value's text at the given nesting depth. Composite
/// children are emitted at `depth + 1`, each preceded by its indentation.
fn generate(value: &Value, depth: usize, out: &mut String) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Number(n) => generate_number(*n, out)?,
        Value::String(s) => generate_string(s, out)?,
        Value::Array(arr) => generate_array(arr, depth, out)?,
        Value::Object(obj) => generate_object(obj, depth, out)?,
    }
    Ok(())
}

fn generate_number(number: Number, out: &mut String) -> Result<()> {
    match number {
        Number::Int(n) => out.push_str(&n.to_string()),
        Number::Double(d) => {
            if !d.is_finite() {
                return Err(JsonError::Generate(format!(
                    "cannot serialize non-finite number {d}"
                )));
            }
            let mut rendered = d.to_string();
            // Keep the double-kind marker so the value parses back as a double.
            if !rendered.contains('.') && !rendered.contains(['e', 'E']) {
                rendered.push_str(".0");
            }
            out.push_str(&rendered);
        }
    }
    Ok(())
}

fn generate_string(s: &str, out: &mut String) -> Result<()> {
    for ch in s.chars() {
        if matches!(ch, '\n' | '\r' | '\\' | '"') {
            return Err(JsonError::Generate(format!(
                "cannot serialize string containing {ch:?}"
            )));
        }
    }
    out.push('"');
    out.push_str(s);
    out.push('"');
    Ok(())
}

fn generate_array(arr: &Array, depth: usize, out: &mut String) -> Result<()> {
    out.push_str("[\n");
    let last = arr.len().saturating_sub(1);
    for (i, element) in arr.iter().enumerate() {
        push_indent(depth + 1, out);
        generate(element, depth + 1, out)?;
        if i != last {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(depth, out);
    out.push(']');
    Ok(())
}

fn generate_object(obj: &Object, depth: usize, out: &mut String) -> Result<()> {
    out.push_str("{\n");
    let last = obj.len().saturating_sub(1);
    for (i, (key, member)) in obj.iter().enumerate() {
        push_indent(depth + 1, out);
        // The key goes back through the string path, so it gets the same
        // forbidden-character verification as any string value.
        generate_string(key, out)?;
        out.push_str(" : ");
        generate(member, depth + 1, out)?;
        if i != last {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(depth, out);
    out.push('}');
    Ok(())
}

/// One marker character per nesting level.
fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push(' ');
    }
}
