mod config;
mod page;
mod urls;

pub use config::PaginationConfig;
pub use page::{page_count, paginate, Page};
pub use urls::{build_paginated_url_with_params, build_query_url};
