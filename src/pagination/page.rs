use serde::Serialize;

/// Rows and total matching count returned by a fetch
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Fetched<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }
}

/// One slice of a larger result set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub number: u64,
    pub size: u64,
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.size.max(1))
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            number: self.number,
            size: self.size,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Converts the page into the JSON envelope served to clients
    pub fn response(self) -> Paginated<T> {
        let max = self.total_pages();
        let position = Position {
            current: self.number,
            next: self.has_next().then(|| self.number + 1),
            previous: self.has_previous().then(|| self.number - 1),
            max,
        };

        Paginated {
            page: PageInfo {
                position,
                data: PageData {
                    per: self.size,
                    total: self.total,
                },
            },
            data: self.items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub page: PageInfo,
    pub data: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub position: Position,
    pub data: PageData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub current: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<u64>,
    pub max: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub per: u64,
    pub total: u64,
}
