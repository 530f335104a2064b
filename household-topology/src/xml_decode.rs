//! XML helpers shared by the topology decoder and the event envelope parser.
//!
//! Devices prefix element names with namespaces (`e:propertyset`,
//! `s:Envelope`) and declare them inconsistently. Both parsers work on
//! prefix-free XML, so prefixes and `xmlns` declarations are removed first.

use serde::de::DeserializeOwned;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::{Result, TopologyError};

/// Deserialize namespace-stripped XML into `T` with quick-xml.
pub fn parse<T: DeserializeOwned>(xml: &str) -> Result<T> {
    let stripped = strip_namespaces(xml);
    quick_xml::de::from_str(&stripped)
        .map_err(|e| TopologyError::malformed(format!("XML deserialization failed: {}", e)))
}

/// Parse namespace-stripped XML into a generic element tree.
pub fn parse_tree(xml: &str) -> Result<xmltree::Element> {
    let stripped = strip_namespaces(xml);
    xmltree::Element::parse(stripped.as_bytes())
        .map_err(|e| TopologyError::malformed(format!("document is not well-formed XML: {}", e)))
}

/// Strip namespace prefixes from element and attribute names, and drop
/// `xmlns` declarations.
///
/// Input: `<e:propertyset xmlns:e="urn:x"><e:property/></e:propertyset>`
/// Output: `<propertyset ><property/></propertyset>`
///
/// Text content and attribute values are copied untouched, so escaped
/// payloads such as `&lt;ZoneGroupState&gt;` survive as-is.
pub fn strip_namespaces(xml: &str) -> String {
    let mut result = String::with_capacity(xml.len());
    let mut chars = xml.chars().peekable();

    while let Some(c) = chars.next() {
        result.push(c);
        if c != '<' {
            continue;
        }

        if let Some(slash) = chars.next_if_eq(&'/') {
            result.push(slash);
        }

        // Declarations, comments and processing instructions are copied verbatim
        if matches!(chars.peek(), Some('?') | Some('!')) {
            copy_until(&mut chars, &mut result, '>');
            continue;
        }

        let tag_name = take_name(&mut chars);
        result.push_str(local_name(&tag_name));

        while let Some(&ch) = chars.peek() {
            if ch == '>' {
                result.push(ch);
                chars.next();
                break;
            }
            if ch == '/' || ch.is_whitespace() {
                result.push(ch);
                chars.next();
                continue;
            }

            let attr_name = take_name(&mut chars);
            if attr_name.is_empty() {
                // Stray character inside a tag, keep it and move on
                if let Some(other) = chars.next() {
                    result.push(other);
                }
                continue;
            }

            if attr_name == "xmlns" || attr_name.starts_with("xmlns:") {
                skip_attribute_value(&mut chars);
                continue;
            }

            result.push_str(local_name(&attr_name));
            copy_attribute_value(&mut chars, &mut result);
        }
    }

    result
}

fn local_name(name: &str) -> &str {
    match name.find(':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

fn take_name(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(ch) =
        chars.next_if(|&ch| !(ch.is_whitespace() || ch == '=' || ch == '>' || ch == '/'))
    {
        name.push(ch);
    }
    name
}

fn copy_until(chars: &mut Peekable<Chars<'_>>, out: &mut String, end: char) {
    for ch in chars.by_ref() {
        out.push(ch);
        if ch == end {
            break;
        }
    }
}

fn copy_attribute_value(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    while let Some(&ch) = chars.peek() {
        if ch == '>' || ch == '/' {
            break;
        }
        chars.next();
        out.push(ch);
        if ch == '"' || ch == '\'' {
            copy_until(chars, out, ch);
            break;
        }
    }
}

fn skip_attribute_value(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|ch| ch.is_whitespace() || *ch == '=').is_some() {}
    if let Some(quote) = chars.next_if(|ch| *ch == '"' || *ch == '\'') {
        for ch in chars.by_ref() {
            if ch == quote {
                break;
            }
        }
    }
}
