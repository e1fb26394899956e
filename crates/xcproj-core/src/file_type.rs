//! `lastKnownFileType` values for new file references

/// File type Xcode records for a file with the given extension.
///
/// Unknown extensions fall back to the generic `file` type.
pub fn last_known_file_type(extension: Option<&str>) -> &'static str {
    let Some(ext) = extension else {
        return "file";
    };
    match ext.to_ascii_lowercase().as_str() {
        "m" => "sourcecode.c.objc",
        "mm" => "sourcecode.cpp.objcpp",
        "c" => "sourcecode.c.c",
        "cc" | "cpp" | "cxx" => "sourcecode.cpp.cpp",
        "h" => "sourcecode.c.h",
        "hpp" => "sourcecode.cpp.h",
        "swift" => "sourcecode.swift",
        "metal" => "sourcecode.metal",
        "plist" => "text.plist.xml",
        "strings" => "text.plist.strings",
        "json" => "text.json",
        "xml" => "text.xml",
        "txt" => "text",
        "pem" => "text",
        "cer" | "der" => "file",
        "png" => "image.png",
        "jpg" | "jpeg" => "image.jpeg",
        "storyboard" => "file.storyboard",
        "xib" => "file.xib",
        "xcassets" => "folder.assetcatalog",
        "xcconfig" => "text.xcconfig",
        "framework" => "wrapper.framework",
        "a" => "archive.ar",
        "dylib" => "compiled.mach-o.dylib",
        "bundle" => "wrapper.plug-in",
        _ => "file",
    }
}
