//! RSS document parsing.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{Error, Result};
use crate::feed::item::FeedItem;

/// Parse an RSS document into its item links, in document order.
///
/// Only `<channel><item><link>` under the root element is read. Every item
/// yields a [`FeedItem`], with an empty link when it has none. When an item
/// carries several links the last one wins.
pub fn parse_feed(xml: &[u8]) -> Result<Vec<FeedItem>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut buf = Vec::new();

    // Open element names, root first.
    let mut path: Vec<String> = Vec::new();
    let mut seen_root = false;
    let mut current_link = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                seen_root = true;
                path.push(name);

                if is_item(&path) || is_link(&path) {
                    current_link.clear();
                }
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                seen_root = true;

                path.push(name);
                if is_item(&path) {
                    items.push(FeedItem::new(""));
                } else if is_link(&path) {
                    current_link.clear();
                }
                path.pop();
            }
            Ok(Event::End(_)) => {
                if is_item(&path) {
                    items.push(FeedItem::new(current_link.trim()));
                    current_link.clear();
                }
                path.pop();
            }
            Ok(Event::Text(e)) => {
                if is_link(&path) {
                    let text = e
                        .unescape()
                        .map_err(|e| Error::FeedParse(format!("Invalid link text: {}", e)))?;
                    current_link.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if is_link(&path) {
                    current_link.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::FeedParse(format!(
                    "XML parse error at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    if !path.is_empty() {
        return Err(Error::FeedParse(format!(
            "Unexpected end of document, <{}> is not closed",
            path.join("><")
        )));
    }

    if !seen_root {
        return Err(Error::FeedParse("Document has no root element".to_string()));
    }

    Ok(items)
}

fn is_item(path: &[String]) -> bool {
    path.len() == 3 && path[1] == "channel" && path[2] == "item"
}

fn is_link(path: &[String]) -> bool {
    path.len() == 4 && path[1] == "channel" && path[2] == "item" && path[3] == "link"
}
