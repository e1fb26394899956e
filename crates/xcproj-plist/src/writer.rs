//! Xcode-style writer for project property lists.
//!
//! Output matches what Xcode writes for `project.pbxproj`:
//! - the `// !$*UTF8*$!` header and tab indentation,
//! - keys sorted with `isa` first,
//! - the root `objects` table split into `/* Begin <isa> section */` blocks,
//!   ordered by isa and then by object id,
//! - `PBXBuildFile` and `PBXFileReference` objects on a single line,
//! - `/* comment */` annotations after object ids.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

use crate::value::{Dictionary, Value};

/// Header line every Xcode project file starts with.
pub const HEADER: &str = "// !$*UTF8*$!";

/// Object kinds Xcode writes on a single line.
pub const INLINE_ISAS: &[&str] = &["PBXBuildFile", "PBXFileReference"];

/// Keys whose values are ids that Xcode never annotates.
const UNANNOTATED_KEYS: &[&str] = &["remoteGlobalIDString"];

/// Strings Xcode writes without quotes.
///
/// Narrower than what the parser accepts: Xcode quotes `-`, `+` and `:`.
static UNQUOTED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_$./]+$").expect("Invalid unquoted string regex")
});

/// Supplies the `/* comment */` text written after an object id.
pub trait Annotate {
    /// Annotation for `id`, or `None` to write the id bare.
    fn annotation(&self, id: &str) -> Option<String>;
}

/// Writes every id without annotations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnnotations;

impl Annotate for NoAnnotations {
    fn annotation(&self, _id: &str) -> Option<String> {
        None
    }
}

/// Render a project root dictionary in Xcode's layout.
///
/// The output ends with a newline.
pub fn write_project(root: &Dictionary, annotate: &dyn Annotate) -> String {
    let mut writer = Writer {
        out: String::new(),
        annotate,
    };
    writer.out.push_str(HEADER);
    writer.out.push('\n');
    writer.write_root(root);
    writer.out.push('\n');
    writer.out
}

/// Quote and escape `s` if the unquoted form would not read back unchanged.
pub fn quote_string(s: &str) -> String {
    if UNQUOTED_REGEX.is_match(s) && !s.contains("//") && !s.contains("/*") {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => {
                let _ = write!(out, "\\U{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Keys in Xcode order: `isa` first, then sorted.
fn sorted_keys(dict: &Dictionary) -> Vec<&str> {
    let mut keys: Vec<&str> = dict.keys().collect();
    keys.sort_by(|a, b| match (*a == "isa", *b == "isa") {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.cmp(b),
    });
    keys
}

fn tabs(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}

struct Writer<'a> {
    out: String,
    annotate: &'a dyn Annotate,
}

impl Writer<'_> {
    fn write_root(&mut self, root: &Dictionary) {
        self.out.push_str("{\n");
        for key in sorted_keys(root) {
            let Some(value) = root.get(key) else {
                continue;
            };
            tabs(&mut self.out, 1);
            self.out.push_str(&quote_string(key));
            self.out.push_str(" = ");
            match (key, value) {
                ("objects", Value::Dictionary(objects)) => self.write_objects(objects),
                _ => self.write_value(value, 1, false, true),
            }
            self.out.push_str(";\n");
        }
        self.out.push('}');
    }

    fn write_objects(&mut self, objects: &Dictionary) {
        let mut sections: BTreeMap<&str, Vec<(&str, &Value)>> = BTreeMap::new();
        for (id, object) in objects.iter() {
            let isa = object
                .as_dict()
                .and_then(|d| d.get_str("isa"))
                .unwrap_or_default();
            sections.entry(isa).or_default().push((id, object));
        }

        self.out.push_str("{\n");
        for (isa, mut entries) in sections {
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let inline = INLINE_ISAS.contains(&isa);

            if !isa.is_empty() {
                let _ = writeln!(self.out, "\n/* Begin {} section */", isa);
            }
            for (id, object) in entries {
                tabs(&mut self.out, 2);
                self.write_id(id);
                self.out.push_str(" = ");
                self.write_value(object, 2, inline, true);
                self.out.push_str(";\n");
            }
            if !isa.is_empty() {
                let _ = writeln!(self.out, "/* End {} section */", isa);
            }
        }
        tabs(&mut self.out, 1);
        self.out.push('}');
    }

    fn write_id(&mut self, id: &str) {
        self.out.push_str(&quote_string(id));
        if let Some(comment) = self.annotate.annotation(id) {
            let _ = write!(self.out, " /* {} */", comment);
        }
    }

    fn write_value(&mut self, value: &Value, depth: usize, inline: bool, annotate: bool) {
        match value {
            Value::String(s) if annotate => self.write_id(s),
            Value::String(s) => self.out.push_str(&quote_string(s)),
            Value::Data(bytes) => {
                self.out.push('<');
                for byte in bytes {
                    let _ = write!(self.out, "{:02x}", byte);
                }
                self.out.push('>');
            }
            Value::Array(items) => self.write_array(items, depth, inline, annotate),
            Value::Dictionary(dict) => self.write_dict(dict, depth, inline),
        }
    }

    fn write_array(&mut self, items: &[Value], depth: usize, inline: bool, annotate: bool) {
        if inline {
            self.out.push('(');
            for item in items {
                self.write_value(item, depth, true, annotate);
                self.out.push_str(", ");
            }
            self.out.push(')');
            return;
        }

        self.out.push_str("(\n");
        for item in items {
            tabs(&mut self.out, depth + 1);
            self.write_value(item, depth + 1, false, annotate);
            self.out.push_str(",\n");
        }
        tabs(&mut self.out, depth);
        self.out.push(')');
    }

    fn write_dict(&mut self, dict: &Dictionary, depth: usize, inline: bool) {
        if inline {
            self.out.push('{');
            for key in sorted_keys(dict) {
                if let Some(value) = dict.get(key) {
                    self.out.push_str(&quote_string(key));
                    self.out.push_str(" = ");
                    self.write_value(value, depth, true, !UNANNOTATED_KEYS.contains(&key));
                    self.out.push_str("; ");
                }
            }
            self.out.push('}');
            return;
        }

        self.out.push_str("{\n");
        for key in sorted_keys(dict) {
            if let Some(value) = dict.get(key) {
                tabs(&mut self.out, depth + 1);
                self.out.push_str(&quote_string(key));
                self.out.push_str(" = ");
                self.write_value(value, depth + 1, false, !UNANNOTATED_KEYS.contains(&key));
                self.out.push_str(";\n");
            }
        }
        tabs(&mut self.out, depth);
        self.out.push('}');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    struct Names;

    impl Annotate for Names {
        fn annotation(&self, id: &str) -> Option<String> {
            match id {
                "AAAA00000000000000000001" => Some("main.m in Sources".to_string()),
                "AAAA00000000000000000002" => Some("main.m".to_string()),
                _ => None,
            }
        }
    }

    #[rstest]
    #[case("", "\"\"")]
    #[case("main.m", "main.m")]
    #[case("<group>", "\"<group>\"")]
    #[case("Hello World", "\"Hello World\"")]
    #[case("$(SRCROOT)/x", "\"$(SRCROOT)/x\"")]
    #[case("a//b", "\"a//b\"")]
    #[case("say \"hi\"\n", "\"say \\\"hi\\\"\\n\"")]
    #[case("sourcecode.c.objc", "sourcecode.c.objc")]
    #[case("-ObjC", "\"-ObjC\"")]
    #[case("App-Info.plist", "\"App-Info.plist\"")]
    fn test_quote_string(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(quote_string(input), expected);
    }

    #[test]
    fn test_write_inline_build_file_section() {
        let source = r#"{
            objects = {
                AAAA00000000000000000001 = {fileRef = AAAA00000000000000000002; isa = PBXBuildFile; };
            };
            archiveVersion = 1;
        }"#;
        let root = parse(source).unwrap();

        let expected = "// !$*UTF8*$!
{
\tarchiveVersion = 1;
\tobjects = {

/* Begin PBXBuildFile section */
\t\tAAAA00000000000000000001 /* main.m in Sources */ = {isa = PBXBuildFile; fileRef = AAAA00000000000000000002 /* main.m */; };
/* End PBXBuildFile section */
\t};
}
";
        assert_eq!(write_project(&root, &Names), expected);
    }

    #[test]
    fn test_write_multiline_group_and_empty_containers() {
        let source = r#"{
            classes = { };
            objects = {
                BBBB00000000000000000001 = {
                    isa = PBXGroup;
                    children = ( AAAA00000000000000000002 );
                    sourceTree = "<group>";
                    tags = ( );
                };
            };
        }"#;
        let root = parse(source).unwrap();

        let expected = "// !$*UTF8*$!
{
\tclasses = {
\t};
\tobjects = {

/* Begin PBXGroup section */
\t\tBBBB00000000000000000001 = {
\t\t\tisa = PBXGroup;
\t\t\tchildren = (
\t\t\t\tAAAA00000000000000000002 /* main.m */,
\t\t\t);
\t\t\tsourceTree = \"<group>\";
\t\t\ttags = (
\t\t\t);
\t\t};
/* End PBXGroup section */
\t};
}
";
        assert_eq!(write_project(&root, &Names), expected);
    }

    #[test]
    fn test_write_data_value() {
        let mut root = Dictionary::new();
        root.insert("blob", Value::Data(vec![0x0f, 0xbd]));
        assert_eq!(write_project(&root, &NoAnnotations), "// !$*UTF8*$!\n{\n\tblob = <0fbd>;\n}\n");
    }
}
