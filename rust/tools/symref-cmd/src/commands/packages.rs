//! Packages command implementation

use anyhow::Result;

use super::IndexArgs;

pub fn run(index: IndexArgs, prefix: Option<String>, direct_only: bool) -> Result<()> {
    let open = index.open()?;
    let names = open
        .session
        .package_names(&open.segment, prefix.as_deref(), direct_only)?;
    for name in names {
        if name.is_empty() {
            println!("<unnamed>");
        } else {
            println!("{name}");
        }
    }
    Ok(())
}
