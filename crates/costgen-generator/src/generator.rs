//! Report generator: the fixed day/row iteration shared by every service.

use crate::fake::{FakeData, Faker};
use chrono::{DateTime, NaiveDate, Utc};
use costgen_core::{
    create_days_list, DateRange, GeneratedDataset, Provider, RangeError, Row, ServiceKind,
};
use tracing::{debug, info};

/// Error type for generator construction.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Date range error
    #[error("Invalid date range: {0}")]
    InvalidRange(#[from] RangeError),
}

/// Provider-level identity stamped on every row of a report.
///
/// Real exports repeat the billing account (or subscription, or project) on
/// every line, so one identity is drawn per generator and shared by all of
/// its rows.
pub trait ProviderAccount {
    /// Provider whose schema rows follow.
    const PROVIDER: Provider;

    /// Draw a fresh identity.
    fn generate(fake: &mut dyn FakeData) -> Self
    where
        Self: Sized;

    /// Write the identity and the day's timestamps into a skeleton row.
    fn stamp_row(&self, row: &mut Row, day_start: DateTime<Utc>, day_end: DateTime<Utc>);
}

/// Service-specific value policy.
///
/// Implementors choose a catalog variant and fill value, cost and unit
/// columns. They must return a row with exactly the key set they received;
/// [`ReportGenerator::generate_data`] panics otherwise.
pub trait ServiceGenerator {
    /// Provider account type, which also fixes the row schema.
    type Account: ProviderAccount;

    /// Registry entry for this service.
    const KIND: ServiceKind;

    /// Column holding the catalog identifier of each row.
    const ID_COLUMN: &'static str;

    /// Every identifier the catalog can emit into [`Self::ID_COLUMN`].
    fn catalog_ids(&self) -> Vec<&'static str>;

    /// Fill service-specific columns of a schema-complete row.
    fn update_data(&self, row: Row, fake: &mut dyn FakeData) -> Row;
}

/// Generates a [`GeneratedDataset`] for one service over a date range.
///
/// Owns the day/row iteration and schema conformance; only value synthesis
/// is delegated to the [`ServiceGenerator`].
pub struct ReportGenerator<S: ServiceGenerator, F: FakeData = Faker> {
    range: DateRange,
    num_instances: usize,
    account: S::Account,
    service: S,
    fake: F,
}

impl<S: ServiceGenerator, F: FakeData> ReportGenerator<S, F> {
    /// Create a generator. The provider identity is drawn from `fake` here.
    pub fn new(range: DateRange, num_instances: usize, service: S, mut fake: F) -> Self {
        let account = S::Account::generate(&mut fake);
        Self {
            range,
            num_instances,
            account,
            service,
            fake,
        }
    }

    /// Create a generator from raw dates. Fails if `start > end`.
    pub fn from_dates(
        start: NaiveDate,
        end: NaiveDate,
        num_instances: usize,
        service: S,
        fake: F,
    ) -> Result<Self, GeneratorError> {
        let range = DateRange::new(start, end)?;
        Ok(Self::new(range, num_instances, service, fake))
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn num_instances(&self) -> usize {
        self.num_instances
    }

    /// Provider identity shared by every row.
    pub fn account(&self) -> &S::Account {
        &self.account
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// A new row with every schema column at its neutral default, plus
    /// the provider identity and the day's timestamps.
    pub fn init_data_row(&self, day_start: DateTime<Utc>, day_end: DateTime<Utc>) -> Row {
        let mut row = Row::skeleton(S::Account::PROVIDER);
        self.account.stamp_row(&mut row, day_start, day_end);
        row
    }

    /// Generate `num_instances` rows for every day of the range.
    ///
    /// Each call draws new values over the same day/row skeleton.
    ///
    /// # Panics
    ///
    /// If the service's `update_data` adds or removes a column.
    pub fn generate_data(&mut self) -> GeneratedDataset {
        let provider = S::Account::PROVIDER;
        let days = create_days_list(self.range.start(), self.range.end());

        info!(
            "Generating {} data for {} day(s) with {} instance(s)",
            S::KIND,
            days.len(),
            self.num_instances
        );

        let mut dataset = GeneratedDataset::new(provider);
        for day in days {
            let mut rows = Vec::with_capacity(self.num_instances);
            for _ in 0..self.num_instances {
                let row = self.init_data_row(day.start, day.end);
                let row = self.service.update_data(row, &mut self.fake);
                if let Err(violation) = row.check_schema(provider) {
                    panic!("{} generator broke the row schema: {violation}", S::KIND);
                }
                rows.push(row);
            }
            debug!("Generated {} row(s) for {}", rows.len(), day.date());
            dataset.insert_day(day.start, rows);
        }

        info!(
            "Generated {} {} row(s) over {} day(s)",
            dataset.row_count(),
            S::KIND,
            dataset.len()
        );

        dataset
    }
}

/// Type-erased generator, for callers that pick a service at runtime.
pub trait DatasetGenerator {
    fn service(&self) -> ServiceKind;

    fn range(&self) -> DateRange;

    fn generate_data(&mut self) -> GeneratedDataset;
}

impl<S: ServiceGenerator, F: FakeData> DatasetGenerator for ReportGenerator<S, F> {
    fn service(&self) -> ServiceKind {
        S::KIND
    }

    fn range(&self) -> DateRange {
        self.range
    }

    fn generate_data(&mut self) -> GeneratedDataset {
        ReportGenerator::generate_data(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::Faker;
    use crate::generators::gcp::{CloudStorageGenerator, GcpAccount};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Adds a column the GCP schema does not have.
    struct ExtraColumnService;

    impl ServiceGenerator for ExtraColumnService {
        type Account = GcpAccount;
        const KIND: ServiceKind = ServiceKind::CloudStorage;
        const ID_COLUMN: &'static str = "line_item";

        fn catalog_ids(&self) -> Vec<&'static str> {
            vec![]
        }

        fn update_data(&self, mut row: Row, _fake: &mut dyn FakeData) -> Row {
            row.set("sku_id", "extra");
            row
        }
    }

    /// Drops a schema column.
    struct MissingColumnService;

    impl ServiceGenerator for MissingColumnService {
        type Account = GcpAccount;
        const KIND: ServiceKind = ServiceKind::CloudStorage;
        const ID_COLUMN: &'static str = "line_item";

        fn catalog_ids(&self) -> Vec<&'static str> {
            vec![]
        }

        fn update_data(&self, mut row: Row, _fake: &mut dyn FakeData) -> Row {
            row.remove("cost");
            row
        }
    }

    #[test]
    fn test_init_data_row_conforms_and_stamps_day() {
        let generator = ReportGenerator::new(
            DateRange::single_day(date(2023, 6, 1)),
            1,
            CloudStorageGenerator,
            Faker::seeded(42),
        );
        let day = costgen_core::DayInterval::for_date(date(2023, 6, 1));

        let row = generator.init_data_row(day.start, day.end);

        assert!(row.conforms_to(Provider::Gcp));
        assert_eq!(row.get_str("start_time"), Some("2023-06-01T00:00:00+00:00"));
        assert_eq!(row.get_str("end_time"), Some("2023-06-02T00:00:00+00:00"));
        assert_eq!(
            row.get_str("account_id"),
            Some(generator.account().account_id.as_str())
        );
        assert_eq!(row.get_str("line_item"), Some(""));
    }

    #[test]
    fn test_from_dates_rejects_inverted_range() {
        let result = ReportGenerator::from_dates(
            date(2023, 6, 2),
            date(2023, 6, 1),
            1,
            CloudStorageGenerator,
            Faker::seeded(42),
        );
        assert!(matches!(result, Err(GeneratorError::InvalidRange(_))));
    }

    #[test]
    fn test_rows_per_day() {
        for num_instances in [0, 1, 5] {
            let mut generator = ReportGenerator::from_dates(
                date(2023, 1, 30),
                date(2023, 2, 2),
                num_instances,
                CloudStorageGenerator,
                Faker::seeded(42),
            )
            .unwrap();

            let dataset = generator.generate_data();

            assert_eq!(dataset.len(), 4);
            for (_, rows) in dataset.iter() {
                assert_eq!(rows.len(), num_instances);
            }
        }
    }

    #[test]
    fn test_keys_match_day_starts_in_order() {
        let range = DateRange::new(date(2023, 12, 30), date(2024, 1, 2)).unwrap();
        let mut generator = ReportGenerator::new(range, 1, CloudStorageGenerator, Faker::seeded(1));

        let dataset = generator.generate_data();

        let keys: Vec<_> = dataset.day_starts().copied().collect();
        let expected: Vec<_> = range.days().iter().map(|d| d.start).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let range = DateRange::new(date(2023, 6, 1), date(2023, 6, 3)).unwrap();

        let mut gen1 = ReportGenerator::new(range, 3, CloudStorageGenerator, Faker::seeded(42));
        let mut gen2 = ReportGenerator::new(range, 3, CloudStorageGenerator, Faker::seeded(42));

        assert_eq!(gen1.generate_data(), gen2.generate_data());
    }

    #[test]
    fn test_repeated_calls_redraw_values() {
        let range = DateRange::new(date(2023, 6, 1), date(2023, 6, 10)).unwrap();
        let mut generator = ReportGenerator::new(range, 5, CloudStorageGenerator, Faker::seeded(42));

        let first = generator.generate_data();
        let second = generator.generate_data();

        assert_eq!(
            first.day_starts().collect::<Vec<_>>(),
            second.day_starts().collect::<Vec<_>>()
        );
        assert_ne!(first, second);
    }

    #[test]
    fn test_type_erased_generator() {
        let range = DateRange::single_day(date(2023, 6, 1));
        let mut generator: Box<dyn DatasetGenerator> = Box::new(ReportGenerator::new(
            range,
            2,
            CloudStorageGenerator,
            Faker::seeded(42),
        ));

        assert_eq!(generator.service(), ServiceKind::CloudStorage);
        assert_eq!(generator.range(), range);
        assert_eq!(generator.generate_data().row_count(), 2);
    }

    #[test]
    #[should_panic(expected = "broke the row schema")]
    fn test_extra_column_panics() {
        let mut generator = ReportGenerator::new(
            DateRange::single_day(date(2023, 6, 1)),
            1,
            ExtraColumnService,
            Faker::seeded(42),
        );
        generator.generate_data();
    }

    #[test]
    #[should_panic(expected = "broke the row schema")]
    fn test_missing_column_panics() {
        let mut generator = ReportGenerator::new(
            DateRange::single_day(date(2023, 6, 1)),
            1,
            MissingColumnService,
            Faker::seeded(42),
        );
        generator.generate_data();
    }
}
