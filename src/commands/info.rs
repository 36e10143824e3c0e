use travelcodec::codec::{find_format, formats};
use travelcodec::error::Result;
use travelcodec::types::FormatMeta;

pub fn run_list() -> Vec<FormatMeta> {
    formats().iter().map(|f| f.meta()).collect()
}

pub fn run_info(name: &str) -> Result<FormatMeta> {
    Ok(find_format(name)?.meta())
}
