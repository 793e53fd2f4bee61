use crate::error::{ControllerError, Result};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Page sizes offered by the page-size selector.
pub const PER_PAGE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// Page size used until the user picks another one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    pub fn new(page: u32) -> Result<Self> {
        NonZeroU32::new(page)
            .map(PageNumber)
            .ok_or(ControllerError::InvalidPage(page))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The following page. There is no upper bound on the client side.
    pub fn next(self) -> Self {
        PageNumber(self.0.saturating_add(1))
    }

    /// The preceding page, or `None` on the first page.
    pub fn previous(self) -> Option<Self> {
        NonZeroU32::new(self.0.get() - 1).map(PageNumber)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A page size taken from [`PER_PAGE_OPTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PerPage(u32);

impl PerPage {
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn options() -> impl Iterator<Item = PerPage> {
        PER_PAGE_OPTIONS.into_iter().map(PerPage)
    }
}

impl Default for PerPage {
    fn default() -> Self {
        PerPage(DEFAULT_PER_PAGE)
    }
}

impl TryFrom<u32> for PerPage {
    type Error = ControllerError;

    fn try_from(value: u32) -> Result<Self> {
        if PER_PAGE_OPTIONS.contains(&value) {
            Ok(PerPage(value))
        } else {
            Err(ControllerError::InvalidPerPage(value.to_string()))
        }
    }
}

impl FromStr for PerPage {
    type Err = ControllerError;

    /// Parses the raw value of the page-size `<select>`.
    fn from_str(s: &str) -> Result<Self> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| ControllerError::InvalidPerPage(s.to_string()))?;
        PerPage::try_from(value)
    }
}

impl fmt::Display for PerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cursor of the records listing.
///
/// Fields only change through [`crate::records::RecordsClient`], which is the
/// single writer of the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    current_page: PageNumber,
    per_page: PerPage,
}

impl Pagination {
    pub fn current_page(&self) -> PageNumber {
        self.current_page
    }

    pub fn per_page(&self) -> PerPage {
        self.per_page
    }

    pub(crate) fn set_current_page(&mut self, page: PageNumber) {
        self.current_page = page;
    }

    /// A new page size always restarts from the first page.
    pub(crate) fn reset_with_per_page(&mut self, per_page: PerPage) {
        self.per_page = per_page;
        self.current_page = PageNumber::FIRST;
    }
}
