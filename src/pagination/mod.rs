mod calculator;
mod config;
mod error;
mod page;
mod range;
mod request;
mod sort;

pub use calculator::{paginate, paginate_with, PageRequest, PageSource, PaginateExt};
pub use config::{PageKeys, PaginationConfig, DEFAULT_PAGE_KEY, DEFAULT_PAGE_SIZE, DEFAULT_PER_KEY};
pub use error::PaginationError;
pub use page::{Fetched, Page, PageData, PageInfo, Paginated, Position};
pub use range::OffsetRange;
pub use request::{paginate_from_request, resolve_page_params, QueryParams};
pub use sort::{Sort, SortDirection};
