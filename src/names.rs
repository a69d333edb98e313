//! Random name pools for fixture data.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Amir", "Anna", "Ben", "Carla", "Chen", "Clara", "Daniel", "Diego", "Elena", "Emma",
    "Felix", "Grace", "Hana", "Henry", "Ines", "Jack", "Jonas", "Julia", "Kai", "Laura", "Leo",
    "Lina", "Marco", "Maria", "Nadia", "Noah", "Olivia", "Paul", "Priya", "Sofia", "Tom",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Baker", "Becker", "Brown", "Castro", "Chen", "Clark", "Diaz", "Evans", "Fischer",
    "Garcia", "Gray", "Haas", "Hansen", "Ito", "Jansen", "Kim", "Kowalski", "Lee", "Lopez",
    "Meyer", "Moreau", "Nguyen", "Novak", "Okafor", "Patel", "Rossi", "Sato", "Silva", "Smith",
    "Weber", "Wright",
];

pub fn random_first_name() -> &'static str {
    FIRST_NAMES[rand::thread_rng().gen_range(0..FIRST_NAMES.len())]
}

pub fn random_last_name() -> &'static str {
    LAST_NAMES[rand::thread_rng().gen_range(0..LAST_NAMES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_come_from_the_pools() {
        for _ in 0..100 {
            assert!(FIRST_NAMES.contains(&random_first_name()));
            assert!(LAST_NAMES.contains(&random_last_name()));
        }
    }

    #[test]
    fn names_are_never_empty() {
        assert!(FIRST_NAMES.iter().all(|n| !n.is_empty()));
        assert!(LAST_NAMES.iter().all(|n| !n.is_empty()));
    }
}
