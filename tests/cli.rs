use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

const TD3: &str = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\nL898902C36UTO7408122F1204159ZE184226B<<<<<16";
const BCBP: &str = "M1DESMARAIS/LUC       EABC123 YULFRAAC 0834 226F001A0025 1AA";

fn cmd() -> Command {
    Command::cargo_bin("travelcodec").unwrap()
}

#[test]
fn parse_mrz_text() {
    cmd()
        .args(["parse-mrz", "-i", TD3])
        .assert()
        .success()
        .stdout(contains("L898902C3"))
        .stdout(contains("ERIKSSON ANNA MARIA"))
        .stdout(contains("valid"));
}

#[test]
fn parse_mrz_json_from_stdin() {
    cmd()
        .args(["parse-mrz", "--json"])
        .write_stdin(format!("{}\n", TD3))
        .assert()
        .success()
        .stdout(contains("\"document_class\": \"TD3\""))
        .stdout(contains("\"is_valid\": true"));
}

#[test]
fn parse_mrz_unsupported_leading_char() {
    cmd()
        .args(["parse-mrz", "-i", "X<UTO"])
        .assert()
        .code(13)
        .stderr(contains("unsupported format"));
}

#[test]
fn verify_valid_zone() {
    cmd().args(["verify", "-i", TD3]).assert().success().stdout(contains("valid"));
}

#[test]
fn verify_corrupted_zone_exits_11() {
    let corrupted = TD3.replace("7408122F", "7408123F");
    cmd()
        .args(["verify", "-i", &corrupted])
        .assert()
        .code(11)
        .stdout(contains("date of birth"));
}

#[test]
fn verify_json_reports_mismatches() {
    let corrupted = TD3.replace("L898902C36", "L898902C37");
    cmd()
        .args(["verify", "--json", "-i", &corrupted])
        .assert()
        .code(11)
        .stdout(contains("\"valid\": false"))
        .stdout(contains("document number"));
}

#[test]
fn verify_short_zone_is_invalid_input() {
    cmd()
        .args(["verify", "-i", "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<"])
        .assert()
        .code(10);
}

#[test]
fn gen_mrz_reproduces_specimen() {
    cmd()
        .args([
            "gen-mrz",
            "--country",
            "UTO",
            "--name",
            "Eriksson Anna Maria",
            "--number",
            "L898902C3",
            "--nationality",
            "UTO",
            "--dob",
            "1974-08-12",
            "--sex",
            "F",
            "--expiry",
            "120415",
            "--personal-number",
            "ZE184226B",
        ])
        .assert()
        .success()
        .stdout(format!("{}\n", TD3));
}

#[test]
fn gen_mrz_unsupported_class() {
    cmd()
        .args([
            "gen-mrz",
            "--class",
            "td1",
            "--country",
            "UTO",
            "--name",
            "Doe John",
            "--number",
            "X1",
            "--nationality",
            "UTO",
            "--dob",
            "1990-01-01",
            "--expiry",
            "2030-01-01",
        ])
        .assert()
        .code(13);
}

#[test]
fn gen_bcbp_seeded_is_repeatable() {
    let args = [
        "gen-bcbp",
        "--last-name",
        "Doe",
        "--first-name",
        "John",
        "--date",
        "2025-02-01",
        "--from",
        "JFK",
        "--to",
        "LHR",
        "--seed",
        "42",
    ];
    let first = cmd().args(args).assert().success().get_output().stdout.clone();
    let second = cmd().args(args).assert().success().get_output().stdout.clone();
    assert_eq!(first, second);

    let line = String::from_utf8(first).unwrap();
    assert!(line.starts_with("M1DOE/JOHN"));
    assert_eq!(line.trim_end_matches('\n').len(), 59);
    assert_eq!(&line[44..47], "032");
}

#[test]
fn gen_bcbp_output_parses() {
    let out = cmd()
        .args([
            "gen-bcbp",
            "--last-name",
            "Roe",
            "--first-name",
            "Jane",
            "--date",
            "2025-12-31",
            "--from",
            "CDG",
            "--to",
            "NRT",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    cmd()
        .args(["parse-bcbp", "--json"])
        .write_stdin(out)
        .assert()
        .success()
        .stdout(contains("\"last_name\": \"ROE\""))
        .stdout(contains("\"julian_day\": \"365\""));
}

#[test]
fn parse_bcbp_text() {
    cmd()
        .args(["parse-bcbp", "-i", BCBP])
        .assert()
        .success()
        .stdout(contains("DESMARAIS"))
        .stdout(contains("YUL"))
        .stdout(contains("834"));
}

#[test]
fn parse_bcbp_too_short() {
    cmd()
        .args(["parse-bcbp", "-i", "M1DOE/JOHN"])
        .assert()
        .code(10)
        .stderr(contains("at least 58"));
}

#[test]
fn check_digit_command() {
    cmd().args(["check-digit", "L898902C3"]).assert().success().stdout("6\n");
    cmd().args(["check-digit", "AB1234567<"]).assert().success().stdout("1\n");
}

#[test]
fn expiry_command() {
    cmd()
        .args(["expiry", "300415", "--json"])
        .assert()
        .success()
        .stdout(contains("-04-15"))
        .stdout(contains("\"expired\""));
    cmd().args(["expiry", "301332"]).assert().code(10);
}

#[test]
fn detect_mrz_and_boarding_pass() {
    cmd()
        .args(["detect", "-i", TD3])
        .assert()
        .success()
        .stdout(contains("mrz"))
        .stdout(contains("MRZ layout: TD3"));
    cmd()
        .args(["detect", "--json", "-i", BCBP])
        .assert()
        .success()
        .stdout(contains("\"format\": \"bcbp\""))
        .stdout(contains("\"document_class\": null"));
}

#[test]
fn list_and_info() {
    cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("bcbp").and(contains("mrz")));
    cmd()
        .args(["info", "icao", "--json"])
        .assert()
        .success()
        .stdout(contains("\"name\": \"mrz\""));
    cmd().args(["info", "pdf417"]).assert().code(13);
}

#[test]
fn debug_logging_keeps_stdout_clean() {
    cmd()
        .env("TRAVELCODEC_LOG", "debug")
        .args(["check-digit", "ABC"])
        .assert()
        .success()
        .stdout("5\n");
}
