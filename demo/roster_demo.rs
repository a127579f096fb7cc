//! This example builds a small campus roster and dumps it.
//!
//! Logging is env-driven, try running it with `RUST_LOG=debug`.

campus_rs::prelude! {
    repr::{Employee, Location, Professor, Student, StudentProfessor},
}

fn run(roster: &mut Roster) -> Res<()> {
    roster.add_member(Student::new("Ana", 20, "none", "A")?)?;
    roster.add_member(Professor::new("Bo", 40, "prof", vec!["CS101".to_string()])?)?;
    roster.add_member(Employee::new("Dee", 35, "registrar", "records")?)?;
    roster.add_member(StudentProfessor::new(
        "Cy",
        30,
        "both",
        vec!["CS200".to_string()],
        "B",
    )?)?;

    roster.add_site(Location::new("Main Hall", 48.117, -1.677))?;
    roster.add_site(Location::new("Annex", 48.119, -1.681))?;

    // late corrections go through the validated setters
    let ana = roster.member_idx("Ana")?;
    roster[ana].person_mut().set_age(21)?;

    Ok(())
}

fn main() {
    simple_logger::SimpleLogger::new()
        .env()
        .without_timestamps()
        .init()
        .expect("failed to init logger /(-_-)\\");

    let mut roster = Roster::new();
    run(&mut roster).unwrap_or_else(|err| {
        println!("an error occurred:");
        for line in err.to_string().lines() {
            println!("- {}", line)
        }
        panic!("run failed")
    });

    println!("|==| done \\(*o*)/");
    for line in roster.to_pretty_string().lines() {
        println!("| {}", line);
    }
    println!("|==|");

    let re = regex::Regex::new("^[AC]").expect("legal regex");
    let matches = roster
        .find_members(&re)
        .into_iter()
        .show_iter_cs(|m_idx| roster[m_idx].person().name().to_string());
    println!("members matching `^[AC]`: {}", matches);
}
