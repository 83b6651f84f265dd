//! Owned, mutable list of people used by the filter demo.

use roster_core::{Error, Person, Result, DEFAULT_AGE_THRESHOLD, MAX_AGE, MIN_AGE};

use crate::reporter::{LogLevel, Reporter, RosterView};

/// Names drawn by [`Roster::add_random_user`].
pub const RANDOM_NAMES: [&str; 8] = [
    "Carlos", "Julia", "Roberto", "Fernanda", "Lucas", "Amanda", "Diego", "Camila",
];

/// Youngest age produced by [`Roster::add_random_user`].
pub const RANDOM_MIN_AGE: u32 = 18;

/// Oldest age produced by [`Roster::add_random_user`].
pub const RANDOM_MAX_AGE: u32 = 67;

/// Reported when `add_user` rejects its input.
pub const VALIDATION_MESSAGE: &str = "Erro: Nome e idade válida são obrigatórios!";

/// A list of people with an id counter.
#[derive(Debug, Clone)]
pub struct Roster {
    people: Vec<Person>,
    next_id: u32,
    threshold: u32,
}

impl Roster {
    /// Creates an empty roster whose first id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            people: Vec::new(),
            next_id: 1,
            threshold: DEFAULT_AGE_THRESHOLD,
        }
    }

    /// Creates a roster holding the three demo people.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            people: vec![
                Person::new(1, "Ana", 25),
                Person::new(2, "Pedro", 30),
                Person::new(3, "Maria", 22),
            ],
            next_id: 4,
            threshold: DEFAULT_AGE_THRESHOLD,
        }
    }

    /// Creates a roster from existing people; the next id follows the highest one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdsExhausted`] when the highest id leaves no id to hand out.
    pub fn from_people(people: Vec<Person>) -> Result<Self> {
        let next_id = match people.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1).ok_or(Error::IdsExhausted { last: max })?,
            None => 1,
        };
        Ok(Self {
            people,
            next_id,
            threshold: DEFAULT_AGE_THRESHOLD,
        })
    }

    /// Sets the age threshold used for views.
    #[must_use]
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns everyone in the roster, in insertion order.
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Returns the id the next insertion will receive.
    #[must_use]
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Returns the age threshold used for views.
    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Returns a display snapshot of the roster.
    #[must_use]
    pub fn view(&self) -> RosterView {
        RosterView::new(self.threshold, &self.people)
    }

    /// Adds a person after validating the name and age.
    ///
    /// # Errors
    ///
    /// Returns a validation error, leaving the roster untouched, when the
    /// trimmed name is empty or the age is outside `0..=120`, and
    /// [`Error::IdsExhausted`] when the id counter cannot advance.
    pub fn add_user<R: Reporter + ?Sized>(
        &mut self,
        name: &str,
        age: i64,
        reporter: &mut R,
    ) -> Result<Person> {
        let (name, age) = match validate(name, age) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected new user");
                reporter.log(LogLevel::Error, VALIDATION_MESSAGE);
                return Err(e);
            },
        };

        let person = match self.push(name, age) {
            Ok(person) => person,
            Err(e) => {
                tracing::warn!(error = %e, "Cannot add user");
                return Err(e);
            },
        };
        reporter.log(
            LogLevel::Success,
            &format!("Usuário adicionado: {} ({} anos)", person.name, person.age),
        );
        reporter.render(&self.view());
        Ok(person)
    }

    /// Adds a person from raw text fields, parsing the age as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAge`] when the age text is not an integer, or
    /// any error [`Roster::add_user`] returns.
    pub fn add_user_from_input<R: Reporter + ?Sized>(
        &mut self,
        name: &str,
        age_text: &str,
        reporter: &mut R,
    ) -> Result<Person> {
        match age_text.trim().parse::<i64>() {
            Ok(age) => self.add_user(name, age, reporter),
            Err(_) => {
                reporter.log(LogLevel::Error, VALIDATION_MESSAGE);
                Err(Error::InvalidAge {
                    input: age_text.to_string(),
                })
            },
        }
    }

    /// Adds a person with a random name from [`RANDOM_NAMES`] and a random age in `18..=67`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdsExhausted`] when the id counter cannot advance.
    pub fn add_random_user<R: Reporter + ?Sized>(
        &mut self,
        rng: &mut fastrand::Rng,
        reporter: &mut R,
    ) -> Result<Person> {
        let name = RANDOM_NAMES[rng.usize(..RANDOM_NAMES.len())];
        let age = rng.u32(RANDOM_MIN_AGE..=RANDOM_MAX_AGE);

        let person = self.push(name.to_string(), age)?;
        reporter.log(
            LogLevel::Success,
            &format!(
                "Usuário aleatório adicionado: {} ({} anos)",
                person.name, person.age
            ),
        );
        reporter.render(&self.view());
        Ok(person)
    }

    /// Removes everyone and restarts ids at 1.
    pub fn clear_users<R: Reporter + ?Sized>(&mut self, reporter: &mut R) {
        self.people.clear();
        self.next_id = 1;

        reporter.clear_log();
        reporter.log(LogLevel::Info, "Lista de usuários limpa!");
        reporter.render(&self.view());
    }

    // The last id is never handed out so `next_id` always stays representable.
    fn push(&mut self, name: String, age: u32) -> Result<Person> {
        let following = self
            .next_id
            .checked_add(1)
            .ok_or(Error::IdsExhausted { last: self.next_id })?;
        let person = Person::new(self.next_id, name, age);
        self.next_id = following;
        self.people.push(person.clone());
        tracing::debug!(id = person.id, name = %person.name, age = person.age, "Added user");
        Ok(person)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(name: &str, age: i64) -> Result<(String, u32)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }

    match u32::try_from(age) {
        Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Ok((name.to_string(), age)),
        _ => Err(Error::AgeOutOfRange {
            age,
            min: MIN_AGE,
            max: MAX_AGE,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::MemoryReporter;

    #[test]
    fn test_new_roster_is_empty() {
        let roster = Roster::new();
        assert!(roster.people().is_empty());
        assert_eq!(roster.next_id(), 1);
        assert_eq!(roster.threshold(), DEFAULT_AGE_THRESHOLD);
    }

    #[test]
    fn test_seeded_roster() {
        let roster = Roster::seeded();
        assert_eq!(roster.people().len(), 3);
        assert_eq!(roster.next_id(), 4);
        assert_eq!(roster.view().older_than, vec!["Ana", "Pedro"]);
    }

    #[test]
    fn test_add_user() {
        let mut roster = Roster::seeded();
        let mut reporter = MemoryReporter::new();

        let person = roster.add_user("  Bruna ", 40, &mut reporter).unwrap();

        assert_eq!(person, Person::new(4, "Bruna", 40));
        assert_eq!(roster.people().len(), 4);
        assert_eq!(roster.next_id(), 5);
        assert_eq!(reporter.messages(), vec!["Usuário adicionado: Bruna (40 anos)"]);
        assert_eq!(reporter.entries()[0].level, LogLevel::Success);
        assert_eq!(reporter.renders(), 1);
        assert_eq!(
            reporter.last_view().unwrap().older_than,
            vec!["Ana", "Pedro", "Bruna"]
        );
    }

    #[test]
    fn test_add_user_accepts_bounds() {
        let mut roster = Roster::new();
        let mut reporter = MemoryReporter::new();

        roster.add_user("Baby", 0, &mut reporter).unwrap();
        roster.add_user("Elder", 120, &mut reporter).unwrap();
        assert_eq!(roster.people().len(), 2);
    }

    #[test]
    fn test_add_user_rejects_empty_name() {
        let mut roster = Roster::seeded();
        let mut reporter = MemoryReporter::new();

        let err = roster.add_user("", 25, &mut reporter).unwrap_err();

        assert!(matches!(err, Error::EmptyName));
        assert!(err.is_validation());
        assert_eq!(roster.people(), Roster::seeded().people());
        assert_eq!(roster.next_id(), 4);
        assert_eq!(reporter.messages(), vec![VALIDATION_MESSAGE]);
        assert_eq!(reporter.entries()[0].level, LogLevel::Error);
        assert_eq!(reporter.renders(), 0);
    }

    #[test]
    fn test_add_user_rejects_whitespace_name() {
        let mut roster = Roster::new();
        let mut reporter = MemoryReporter::new();
        assert!(roster.add_user("   ", 30, &mut reporter).is_err());
        assert!(roster.people().is_empty());
    }

    #[test]
    fn test_add_user_rejects_out_of_range_age() {
        let mut roster = Roster::seeded();
        let mut reporter = MemoryReporter::new();

        let err = roster.add_user("X", 150, &mut reporter).unwrap_err();
        assert!(matches!(err, Error::AgeOutOfRange { age: 150, .. }));

        let err = roster.add_user("X", -1, &mut reporter).unwrap_err();
        assert!(matches!(err, Error::AgeOutOfRange { age: -1, .. }));

        assert_eq!(roster.people().len(), 3);
        assert_eq!(roster.next_id(), 4);
    }

    #[test]
    fn test_add_user_from_input() {
        let mut roster = Roster::new();
        let mut reporter = MemoryReporter::new();

        let person = roster.add_user_from_input("Lia", " 31 ", &mut reporter).unwrap();
        assert_eq!(person, Person::new(1, "Lia", 31));

        let err = roster
            .add_user_from_input("Lia", "thirty", &mut reporter)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAge { .. }));
        assert_eq!(roster.people().len(), 1);
        assert_eq!(reporter.messages().last(), Some(&VALIDATION_MESSAGE));
    }

    #[test]
    fn test_add_random_user() {
        let mut roster = Roster::new();
        let mut reporter = MemoryReporter::new();
        let mut rng = fastrand::Rng::with_seed(42);

        for expected_id in 1..=50 {
            let person = roster.add_random_user(&mut rng, &mut reporter).unwrap();
            assert_eq!(person.id, expected_id);
            assert!(RANDOM_NAMES.contains(&person.name.as_str()));
            assert!((RANDOM_MIN_AGE..=RANDOM_MAX_AGE).contains(&person.age));
        }

        assert_eq!(roster.people().len(), 50);
        assert_eq!(roster.next_id(), 51);
        assert!(reporter.messages()[0].starts_with("Usuário aleatório adicionado: "));
    }

    #[test]
    fn test_add_random_user_is_seed_deterministic() {
        let mut reporter = MemoryReporter::new();
        let mut a = Roster::new();
        let mut b = Roster::new();
        let mut rng_a = fastrand::Rng::with_seed(7);
        let mut rng_b = fastrand::Rng::with_seed(7);

        for _ in 0..5 {
            a.add_random_user(&mut rng_a, &mut reporter).unwrap();
            b.add_random_user(&mut rng_b, &mut reporter).unwrap();
        }
        assert_eq!(a.people(), b.people());
    }

    #[test]
    fn test_clear_users() {
        let mut roster = Roster::seeded();
        let mut reporter = MemoryReporter::new();
        reporter.log(LogLevel::Info, "earlier");

        roster.clear_users(&mut reporter);

        assert!(roster.people().is_empty());
        assert_eq!(roster.next_id(), 1);
        assert_eq!(reporter.messages(), vec!["Lista de usuários limpa!"]);
        assert_eq!(reporter.last_view().unwrap().stats.total, 0);

        let person = roster.add_user("Nova", 33, &mut reporter).unwrap();
        assert_eq!(person.id, 1);
    }

    #[test]
    fn test_from_people_continues_ids() {
        let roster = Roster::from_people(vec![Person::new(9, "Ivo", 70)]).unwrap();
        assert_eq!(roster.next_id(), 10);
        assert_eq!(Roster::from_people(Vec::new()).unwrap().next_id(), 1);
    }

    #[test]
    fn test_from_people_rejects_max_id() {
        let err = Roster::from_people(vec![Person::new(u32::MAX, "Max", 30)]).unwrap_err();
        assert!(matches!(err, Error::IdsExhausted { last: u32::MAX }));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_insertion_stops_at_last_id() {
        let mut roster = Roster::from_people(vec![Person::new(u32::MAX - 2, "Ivo", 70)]).unwrap();
        let mut reporter = MemoryReporter::new();
        let mut rng = fastrand::Rng::with_seed(3);

        let person = roster.add_user("Lia", 31, &mut reporter).unwrap();
        assert_eq!(person.id, u32::MAX - 1);
        assert_eq!(roster.next_id(), u32::MAX);

        let err = roster.add_user("Rui", 40, &mut reporter).unwrap_err();
        assert!(matches!(err, Error::IdsExhausted { last: u32::MAX }));
        assert!(roster.add_random_user(&mut rng, &mut reporter).is_err());

        assert_eq!(roster.people().len(), 2);
        assert_eq!(roster.next_id(), u32::MAX);
        assert_eq!(reporter.renders(), 1);
    }
}
