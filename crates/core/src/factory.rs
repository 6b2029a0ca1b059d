//! Record construction: kind-specific validation followed by assembly

use crate::item::ItemKind;
use crate::record::{ItemDetails, MetadataRecord};
use crate::submission::{
    RawSubmission, FIELD_AUTHOR, FIELD_PAGES, FIELD_SIZE, FIELD_TITLE, FIELD_YEAR,
};
use shelf_validation::{
    NumericValidator, RangeValidator, TextValidator, ValidationErrors, ValidationResult,
    ValidationRule, YearValidator,
};

/// Smallest accepted digital file size, in megabytes
pub const MIN_FILE_SIZE_MB: f64 = 1.0;
/// Largest accepted digital file size, in megabytes
pub const MAX_FILE_SIZE_MB: f64 = 100.0;

/// Builds [`MetadataRecord`]s from raw submissions.
///
/// Title, author and year rules are shared; digital items must carry a
/// size in `[1, 100]` MB and physical items a numeric page count.
#[derive(Debug, Clone)]
pub struct ItemFactory {
    text: TextValidator,
    year: YearValidator,
    size: RangeValidator,
    pages: NumericValidator,
}

impl ItemFactory {
    pub fn new() -> Self {
        Self {
            text: TextValidator::new(),
            year: YearValidator::new(),
            size: RangeValidator::new(MIN_FILE_SIZE_MB, MAX_FILE_SIZE_MB),
            pages: NumericValidator::new(),
        }
    }

    /// Fix the latest accepted year instead of reading the clock
    pub fn with_current_year(mut self, year: i64) -> Self {
        self.year = self.year.current_year(year);
        self
    }

    /// The record for `raw`, or `None` if any rule fails
    pub fn create_record(&self, kind: ItemKind, raw: &RawSubmission) -> Option<MetadataRecord> {
        self.try_create(kind, raw).ok()
    }

    /// Like [`create_record`](Self::create_record), but reports every
    /// failing field instead of just the absence of a record.
    pub fn try_create(
        &self,
        kind: ItemKind,
        raw: &RawSubmission,
    ) -> Result<MetadataRecord, ValidationErrors> {
        let title = raw.text(FIELD_TITLE);
        let author = raw.text(FIELD_AUTHOR);
        let year = raw.integer(FIELD_YEAR);

        let mut errors = ValidationErrors::new();
        collect(&mut errors, self.text.check(FIELD_TITLE, title.as_str()));
        collect(&mut errors, self.text.check(FIELD_AUTHOR, author.as_str()));
        collect(&mut errors, self.year.check(FIELD_YEAR, &year));

        let details = match kind {
            ItemKind::Digital => {
                let file_size_mb = raw.float(FIELD_SIZE);
                collect(&mut errors, self.size.check(FIELD_SIZE, &file_size_mb));
                ItemDetails::Digital { file_size_mb }
            }
            ItemKind::Physical => {
                // Any count passes, zero and negatives included
                let page_count = raw.integer(FIELD_PAGES);
                collect(&mut errors, self.pages.check(FIELD_PAGES, &(page_count as f64)));
                ItemDetails::Physical { page_count }
            }
        };

        errors.into_result()?;
        Ok(MetadataRecord::new(title, author, year, details))
    }
}

impl Default for ItemFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn collect(errors: &mut ValidationErrors, result: ValidationResult<()>) {
    if let Err(e) = result {
        errors.merge(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 2024;

    fn factory() -> ItemFactory {
        ItemFactory::new().with_current_year(NOW)
    }

    fn base() -> RawSubmission {
        RawSubmission::new()
            .with("title", "Dune")
            .with("author", "Herbert")
            .with("year", 1965)
    }

    #[test]
    fn test_digital_record() {
        let record = factory()
            .create_record(ItemKind::Digital, &base().with("size", 2.5))
            .unwrap();
        assert_eq!(record.kind(), ItemKind::Digital);
        assert_eq!(record.file_size_mb(), Some(2.5));
        assert_eq!(
            record.summary(),
            "Digital Resource | Dune | Herbert | 1965 | 2.5MB"
        );
    }

    #[test]
    fn test_physical_record() {
        let record = factory()
            .create_record(ItemKind::Physical, &base().with("pages", "412"))
            .unwrap();
        assert_eq!(record.page_count(), Some(412));
        assert_eq!(
            record.summary(),
            "Print Resource | Dune | Herbert | 1965 | 412 pages"
        );
    }

    #[test]
    fn test_size_boundaries() {
        let factory = factory();
        for size in [1.0, 100.0] {
            assert!(factory
                .create_record(ItemKind::Digital, &base().with("size", size))
                .is_some());
        }
        for size in [0.99, 100.01, 0.0, -5.0] {
            assert!(factory
                .create_record(ItemKind::Digital, &base().with("size", size))
                .is_none());
        }
    }

    #[test]
    fn test_missing_size_fails_digital() {
        let err = factory().try_create(ItemKind::Digital, &base()).unwrap_err();
        assert_eq!(err.codes(), vec!["out_of_range"]);
    }

    #[test]
    fn test_page_count_accepts_zero_and_negative() {
        let factory = factory();
        for pages in ["0", "-10", ""] {
            let record = factory
                .create_record(ItemKind::Physical, &base().with("pages", pages))
                .unwrap();
            assert!(record.page_count().is_some());
        }
    }

    #[test]
    fn test_year_boundaries() {
        let factory = factory();
        let with_year = |year: i64| base().with("year", year).with("size", 10);
        assert!(factory.create_record(ItemKind::Digital, &with_year(1500)).is_some());
        assert!(factory.create_record(ItemKind::Digital, &with_year(NOW)).is_some());
        assert!(factory.create_record(ItemKind::Digital, &with_year(1499)).is_none());
        assert!(factory.create_record(ItemKind::Digital, &with_year(NOW + 1)).is_none());
    }

    #[test]
    fn test_kind_specific_fields_are_ignored_for_other_kind() {
        // A bad size does not matter for a physical item
        let raw = base().with("size", 5000).with("pages", 10);
        assert!(factory().create_record(ItemKind::Physical, &raw).is_some());
    }

    #[test]
    fn test_reports_every_failing_field() {
        let raw = RawSubmission::new().with("year", 1200).with("size", 0);
        let err = factory().try_create(ItemKind::Digital, &raw).unwrap_err();
        assert_eq!(err.fields(), vec!["title", "author", "year", "size"]);
        assert_eq!(
            err.codes(),
            vec!["text_empty", "text_empty", "year_out_of_range", "out_of_range"]
        );
    }

    #[test]
    fn test_overlong_author() {
        let raw = base().with("author", "a".repeat(101)).with("pages", 1);
        let err = factory().try_create(ItemKind::Physical, &raw).unwrap_err();
        assert_eq!(err.codes(), vec!["text_too_long"]);
    }

    #[test]
    fn test_unpinned_factory_reads_clock() {
        let now = shelf_validation::current_year();
        let raw = base().with("year", now).with("pages", 1);
        assert!(ItemFactory::new().create_record(ItemKind::Physical, &raw).is_some());
        let raw = base().with("year", now + 1).with("pages", 1);
        assert!(ItemFactory::new().create_record(ItemKind::Physical, &raw).is_none());
    }
}
