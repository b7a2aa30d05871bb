use crate::models::Page;
use crate::reports;

use super::display;

pub fn run() {
    display::print_page(&reports::render(Page::DataExtraction, None));
    println!("\n💡 Tip: `stockdash fetch AAPL --start 2020-01-01` pulls daily history");
}
