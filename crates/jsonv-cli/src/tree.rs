//! A generic tree of scalar payloads that round-trips through the JSON
//! library using two fixed object keys: `"node"` for the payload and
//! `"subnodes"` for the children. The field names are this layer's contract,
//! not the JSON library's.

use anyhow::{bail, Context, Result};
use jsonv_core::Value;

const NODE_FIELD: &str = "node";
const SUBNODES_FIELD: &str = "subnodes";

/// The scalar payload of a tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Int(i32),
    Double(f64),
    Text(String),
}

/// A tree node with an ordered list of children.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub node: Node,
    pub subnodes: Vec<Tree>,
}

impl Tree {
    /// Read a tree out of a parsed JSON value. The `"node"` field is
    /// required and must be a number or a string; `"subnodes"` is an
    /// optional array of further trees.
    pub fn from_value(value: &Value) -> Result<Tree> {
        let payload = value
            .at_key(NODE_FIELD)
            .with_context(|| format!("missing '{NODE_FIELD}' field"))?;

        let node = if payload.is_double() {
            Node::Double(payload.as_double()?)
        } else if payload.is_integer() {
            Node::Int(payload.as_integer()?)
        } else if payload.is_string() {
            Node::Text(payload.as_string()?.to_string())
        } else {
            bail!("'{NODE_FIELD}' field must be a number or a string");
        };

        let mut subnodes = Vec::new();
        if value.has_field(SUBNODES_FIELD) {
            let children = value.at_key(SUBNODES_FIELD)?.as_array()?;
            subnodes.reserve(children.len());
            for child in children {
                subnodes.push(Tree::from_value(child)?);
            }
        }

        Ok(Tree { node, subnodes })
    }

    /// Write the tree back into a JSON value. The `"subnodes"` field is
    /// omitted for leaf nodes, matching what `from_value` accepts.
    pub fn to_value(&self) -> Result<Value> {
        let mut output = Value::object();
        *output.entry(NODE_FIELD)? = match &self.node {
            Node::Int(n) => Value::number(*n),
            Node::Double(d) => Value::number(*d),
            Node::Text(s) => Value::string(s.clone())?,
        };

        if !self.subnodes.is_empty() {
            *output.entry(SUBNODES_FIELD)? = Value::array_with_len(self.subnodes.len());
            let children = output.at_key_mut(SUBNODES_FIELD)?.as_array_mut()?;
            for (i, sub) in self.subnodes.iter().enumerate() {
                *children.at_mut(i)? = sub.to_value()?;
            }
        }

        Ok(output)
    }
}
