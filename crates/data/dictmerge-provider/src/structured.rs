//! IDEA XML dictionaries
//!
//! Reading accepts any document and collects every `dictionary/words/w`
//! element, whatever component it sits under (project state, cached state,
//! or a whole workspace file). Writing always produces the normalized
//! single-component form:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <component name="ProjectDictionaryState">
//!   <dictionary name="{file stem}">
//!     <words>
//!       <w>...</w>
//!     </words>
//!   </dictionary>
//! </component>
//! ```

use crate::provider::SourceFile;
use crate::Result;
use dictmerge_core::Word;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use roxmltree::{Document, Node};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Component name written on every rewrite
pub const PROJECT_DICTIONARY_STATE: &str = "ProjectDictionaryState";

#[derive(Debug)]
pub struct StructuredDictionary {
    file: SourceFile,
    words: Vec<Word>,
}

impl StructuredDictionary {
    /// Open and parse an existing XML dictionary
    pub fn open(path: impl Into<PathBuf>, read_only: bool) -> Result<Self> {
        let file = SourceFile::open(path.into(), read_only)?;
        let text = std::fs::read_to_string(file.path())?;
        let words = parse_words(&text)?;
        debug!("{} words in {}", words.len(), file.path().display());
        Ok(Self { file, words })
    }

    pub fn read(&self) -> &[Word] {
        &self.words
    }

    /// Discard the original document and write `words` in normalized form
    pub fn write(&mut self, words: &[Word]) -> Result<()> {
        if self.file.skip_write() {
            return Ok(());
        }
        let xml = render_words(self.file.name(), words)?;
        std::fs::write(self.file.path(), xml)?;
        self.words = words.to_vec();
        Ok(())
    }

    pub fn name(&self) -> &str {
        self.file.name()
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn is_read_only(&self) -> bool {
        self.file.read_only()
    }
}

/// Text of every `dictionary/words/w` element in document order.
/// An empty `<w/>` yields an empty word.
pub fn parse_words(xml: &str) -> Result<Vec<Word>> {
    let doc = Document::parse(xml)?;
    Ok(doc
        .descendants()
        .filter(is_dictionary_word)
        .map(|w| w.text().unwrap_or_default().to_string())
        .collect())
}

fn is_dictionary_word(node: &Node) -> bool {
    if !node.has_tag_name("w") {
        return false;
    }
    let Some(words) = node.parent_element() else {
        return false;
    };
    words.has_tag_name("words")
        && words
            .parent_element()
            .is_some_and(|dictionary| dictionary.has_tag_name("dictionary"))
}

/// Serialize `words` as a `ProjectDictionaryState` document, 2-space indent
pub fn render_words(dictionary_name: &str, words: &[Word]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut component = BytesStart::new("component");
    component.push_attribute(("name", PROJECT_DICTIONARY_STATE));
    writer.write_event(Event::Start(component))?;

    let mut dictionary = BytesStart::new("dictionary");
    dictionary.push_attribute(("name", dictionary_name));
    writer.write_event(Event::Start(dictionary))?;

    writer.write_event(Event::Start(BytesStart::new("words")))?;
    for word in words {
        writer.write_event(Event::Start(BytesStart::new("w")))?;
        writer.write_event(Event::Text(BytesText::new(word)))?;
        writer.write_event(Event::End(BytesEnd::new("w")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("words")))?;

    writer.write_event(Event::End(BytesEnd::new("dictionary")))?;
    writer.write_event(Event::End(BytesEnd::new("component")))?;

    let mut xml = String::from_utf8(writer.into_inner().into_inner())?;
    xml.push('\n');
    Ok(xml)
}
