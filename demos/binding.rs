//! A tiny property binding that keeps "not supplied" apart from "cleared".
use std::collections::BTreeMap;

use log::info;
use optval::{AbsentValueAccess, Object, Optional};

struct Property {
    name: &'static str,
    default: Object,
}

fn main() -> Result<(), AbsentValueAccess> {
    #[cfg(feature = "logger")]
    env_logger::init();

    let properties = [
        Property {
            name: "title",
            default: Object::new("untitled"),
        },
        Property {
            name: "width",
            default: Object::new(640u32),
        },
        Property {
            name: "tooltip",
            default: Object::new("hover me"),
        },
    ];

    let mut supplied = BTreeMap::new();
    supplied.insert("title", Optional::some("routes").to_object());
    supplied.insert("tooltip", Optional::some(None::<&str>).to_object());

    for property in &properties {
        let value = supplied
            .get(property.name)
            .cloned()
            .unwrap_or_default();
        // Absent falls back to the default, an explicit null clears it.
        let resolved = value.value_or_default(property.default.clone());
        info!("{} supplied as {value}", property.name);
        println!("{} = {}", property.name, Optional::some(resolved));
    }

    let width = supplied.get("width").cloned().unwrap_or_default();
    println!("width as u32 = {}", width.value_or_default_as::<u32>(640));

    let title = supplied.get("title").cloned().unwrap_or_default();
    println!("title = {}", title.value()?);

    Ok(())
}
