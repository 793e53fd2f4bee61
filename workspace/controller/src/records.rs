use crate::fetch::FetchState;
use crate::pagination::{PageNumber, Pagination, PerPage};
use crate::sequence::{RequestSequence, RequestToken};
use common::{ApiError, Record, RecordsQuery};
use tracing::{debug, info, warn};

/// A records fetch the frontend should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordsRequest {
    pub token: RequestToken,
    pub page: PageNumber,
    pub per_page: PerPage,
}

impl RecordsRequest {
    pub fn query(&self) -> RecordsQuery {
        RecordsQuery {
            page: self.page.get(),
            per_page: self.per_page.get(),
        }
    }
}

/// Completion of a [`RecordsRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordsResponse {
    pub request: RecordsRequest,
    pub result: Result<Vec<Record>, ApiError>,
}

/// What happened to a response handed to [`RecordsClient::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordsApplied {
    Rendered { page: PageNumber, rows: usize },
    Failed(String),
    Stale,
}

/// Paginated records listing. Owns the pagination cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordsClient {
    pagination: Pagination,
    rows: FetchState<Vec<Record>>,
    sequence: RequestSequence,
}

impl RecordsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn rows(&self) -> &FetchState<Vec<Record>> {
        &self.rows
    }

    /// Starts loading `page` with the current page size.
    pub fn load(&mut self, page: PageNumber) -> RecordsRequest {
        let request = RecordsRequest {
            token: self.sequence.issue(),
            page,
            per_page: self.pagination.per_page(),
        };
        debug!(page = page.get(), per_page = request.per_page.get(), token = request.token.value(), "Loading records");
        self.rows = FetchState::Loading;
        request
    }

    /// Reloads whatever page is currently shown.
    pub fn refresh(&mut self) -> RecordsRequest {
        self.load(self.pagination.current_page())
    }

    /// `None` on the first page: nothing is requested and nothing changes.
    pub fn previous(&mut self) -> Option<RecordsRequest> {
        let page = self.pagination.current_page().previous()?;
        Some(self.load(page))
    }

    pub fn next(&mut self) -> RecordsRequest {
        self.load(self.pagination.current_page().next())
    }

    pub fn change_per_page(&mut self, per_page: PerPage) -> RecordsRequest {
        self.pagination.reset_with_per_page(per_page);
        self.load(PageNumber::FIRST)
    }

    /// Applies a completed fetch unless a newer records request was issued
    /// since. Rows replace the whole table in server order.
    pub fn apply(&mut self, response: RecordsResponse) -> RecordsApplied {
        let RecordsResponse { request, result } = response;
        if !self.sequence.is_latest(request.token) {
            debug!(token = request.token.value(), page = request.page.get(), "Discarding stale records response");
            return RecordsApplied::Stale;
        }

        match result {
            Ok(rows) => {
                info!(page = request.page.get(), rows = rows.len(), "Records page rendered");
                let count = rows.len();
                self.pagination.set_current_page(request.page);
                self.rows = FetchState::Success(rows);
                RecordsApplied::Rendered {
                    page: request.page,
                    rows: count,
                }
            }
            Err(err) => {
                warn!(page = request.page.get(), error = %err, "Failed to load records");
                let message = err.to_string();
                self.rows = FetchState::Error(message.clone());
                RecordsApplied::Failed(message)
            }
        }
    }
}
