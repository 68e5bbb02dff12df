use degree_tracker::{Classification, ProgramConfig, RecordError, StudentId, StudentRecord, YearState};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn cohort(config: &ProgramConfig, rng: &mut ChaCha8Rng) -> Vec<StudentRecord> {
    vec![
        StudentRecord::new(config, StudentId(1), "Andrew", "Jackson", "Electrical & Electronic Engineering", 1, rng).unwrap(),
        StudentRecord::new(config, StudentId(2), "Ben", "Kraken", "Software & Electronic Systems Engineering", 2, rng).unwrap(),
        StudentRecord::new(config, StudentId(3), "Chris", "Lightning", "Computer Science", 3, rng).unwrap(),
    ]
}

#[test]
fn test_academic_year_finishes() {
    let config = ProgramConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut students = cohort(&config, &mut rng);
    let mut out = Vec::new();

    for student in &mut students {
        student.advance_year(&mut rng, &mut out).unwrap();
    }

    assert_eq!(students[0].state(), YearState::InProgress { year: 2 });
    assert_eq!(students[1].state(), YearState::InProgress { year: 3 });
    assert!(students[2].is_graduated());

    let announcements = String::from_utf8(out).unwrap();
    assert_eq!(announcements.lines().count(), 1);
    assert!(announcements.starts_with("Chris Lightning has graduated with a "));

    let details = students[2].details();
    assert!(details.contains("Graduate in Computer Science"));
    assert_eq!(details.matches("Year ").count(), 3);
}

#[test]
fn test_year_and_marks_stay_in_step() {
    let config = ProgramConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let mut record = StudentRecord::new(&config, StudentId(7), "Dana", "Reyes", "Physics", 1, &mut rng).unwrap();
    let mut sink = Vec::new();

    while !record.is_graduated() {
        let year = record.current_year();
        record.advance_year(&mut rng, &mut sink).unwrap();
        assert_eq!(record.current_year(), year + 1);
        assert_eq!(record.yearly_marks().len(), record.current_year() as usize - 1);
        assert_eq!(record.classification().is_pending(), record.current_year() <= config.total_years());
    }

    assert_eq!(record.current_year(), config.total_years() + 1);
    assert_ne!(record.classification(), Classification::Pending);
    assert!(matches!(
        record.advance_year(&mut rng, &mut sink),
        Err(RecordError::AlreadyGraduated { .. })
    ));
}

#[test]
fn test_same_seed_reproduces_cohort() {
    let config = ProgramConfig::default();
    let a = cohort(&config, &mut ChaCha8Rng::seed_from_u64(5));
    let b = cohort(&config, &mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(a, b);
}

#[test]
fn test_longer_program_from_config() {
    let config = ProgramConfig::from_json_str(r#"{ "total_years": 4, "modules_per_year": 8 }"#).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut record = StudentRecord::new(&config, StudentId(11), "Eve", "Marsh", "Architecture", 3, &mut rng).unwrap();
    let mut sink = Vec::new();

    assert_eq!(record.advance_year(&mut rng, &mut sink).unwrap(), YearState::InProgress { year: 4 });
    assert!(sink.is_empty());
    assert!(matches!(
        record.advance_year(&mut rng, &mut sink).unwrap(),
        YearState::Graduated { .. }
    ));
    assert!(record.yearly_marks().iter().all(|set| set.len() == 8));
}

#[test]
fn test_config_file_and_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("program.json");
    std::fs::write(&path, r#"{ "modules_per_year": 5, "total_years": 2 }"#).unwrap();

    let config = ProgramConfig::from_json_file(&path).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut record = StudentRecord::new(&config, StudentId(12), "Faye", "Okafor", "Chemistry", 2, &mut rng).unwrap();
    let mut sink = Vec::new();
    record.advance_year(&mut rng, &mut sink).unwrap();
    assert!(record.is_graduated());

    let snapshot_path = dir.path().join("record.json");
    std::fs::write(&snapshot_path, record.to_json().unwrap()).unwrap();
    let restored = StudentRecord::from_json(&std::fs::read_to_string(&snapshot_path).unwrap()).unwrap();
    assert_eq!(restored, record);
    assert_eq!(restored.config().modules_per_year(), 5);
    assert_eq!(restored.details(), record.details());
}

#[test]
fn test_failing_sink_reports_io_error() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let config = ProgramConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut record = StudentRecord::new(&config, StudentId(3), "Chris", "Lightning", "Computer Science", 3, &mut rng).unwrap();

    assert!(matches!(record.advance_year(&mut rng, &mut Broken), Err(RecordError::Io(_))));
    assert!(record.is_graduated());
    assert!(matches!(record.write_details(&mut Broken), Err(RecordError::Io(_))));
}
