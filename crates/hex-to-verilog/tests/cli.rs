use assert_cmd::Command;
use hex_to_verilog::convert::Options;
use std::fs;
use tempfile::TempDir;

fn hex_to_verilog(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hex-to-verilog").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn no_arguments_uses_default_paths() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("instructions_data.hex"), "00000013\nDATA\n0000002a\n").unwrap();

    let output = hex_to_verilog(&dir).output().unwrap();
    assert!(output.status.success(), "{}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "Verilog code successfully written to memory_initialization.v\n"
    );

    let text = fs::read_to_string(dir.path().join("memory_initialization.v")).unwrap();
    assert!(text.contains("\tINSTR_MEM[0] = 32'h00000013;\n"));
    assert!(text.contains("\tfor (i = 1; i < 128; i = i + 1) begin\n\t\tINSTR_MEM[i] = 32'h0;\n"));
    assert!(text.contains("\tDATA_CONST_MEM[0] = 32'h0000002a;\n"));
}

#[test]
fn flags_set_paths_and_layout() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("prog.hex"), "AA\nBB\n\nDATA\nCC\n").unwrap();

    let output = hex_to_verilog(&dir)
        .args(["prog.hex", "prog.v", "--instr-mem", "IMEM", "--data-mem", "DMEM", "--slots", "4"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr_of(&output));
    assert!(stdout_of(&output).contains("prog.v"));

    let text = fs::read_to_string(dir.path().join("prog.v")).unwrap();
    assert_eq!(
        text,
        "module memory_initialization;\n\
         integer i;\n\
         \n\
         // Instruction Memory Initialization\n\
         \tIMEM[0] = 32'hAA;\n\
         \tIMEM[1] = 32'hBB;\n\
         \tfor (i = 2; i < 4; i = i + 1) begin\n\
         \t\tIMEM[i] = 32'h0;\n\
         \tend\n\
         \n\
         // Data Constant Memory Initialization\n\
         \tDMEM[0] = 32'hCC;\n\
         \tfor (i = 1; i < 4; i = i + 1) begin\n\
         \t\tDMEM[i] = 32'h0;\n\
         \tend\n\
         endmodule"
    );
}

#[test]
fn config_file_is_applied() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("image.hex"), "1\n2\n3\nDATA\n").unwrap();
    fs::write(
        dir.path().join("meminit.toml"),
        "input_path = \"image.hex\"\noutput_path = \"rom.v\"\n\n[layout]\ninstruction_memory_name = \"ROM\"\nnum_memory_slots = 2\n",
    )
    .unwrap();

    let output = hex_to_verilog(&dir).args(["--config", "meminit.toml"]).output().unwrap();
    assert!(output.status.success(), "{}", stderr_of(&output));

    let text = fs::read_to_string(dir.path().join("rom.v")).unwrap();
    assert!(text.contains("\tROM[2] = 32'h3;\n"));
    assert!(!text.contains("ROM[i]"));
    assert!(text.contains("\tfor (i = 0; i < 2; i = i + 1) begin\n\t\tDATA_CONST_MEM[i] = 32'h0;\n"));
}

#[test]
fn print_config_does_not_convert() {
    let dir = TempDir::new().unwrap();

    let output = hex_to_verilog(&dir)
        .args(["in.hex", "--slots", "64", "--print-config"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr_of(&output));

    let options: Options = toml::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(options.input_path.to_str(), Some("in.hex"));
    assert_eq!(options.output_path.to_str(), Some("memory_initialization.v"));
    assert_eq!(options.layout.num_memory_slots, 64);
    assert!(!dir.path().join("memory_initialization.v").exists());
}

#[test]
fn missing_delimiter_fails_without_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("instructions_data.hex"), "AA\nBB\n").unwrap();

    let output = hex_to_verilog(&dir).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("no `DATA` delimiter line found in instructions_data.hex"));
    assert!(!dir.path().join("memory_initialization.v").exists());
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();

    let output = hex_to_verilog(&dir).arg("absent.hex").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("failed to read hex image absent.hex"));
    assert!(!dir.path().join("memory_initialization.v").exists());
}

#[test]
fn unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("instructions_data.hex"), "AA\nDATA\n").unwrap();

    let output = hex_to_verilog(&dir)
        .args(["instructions_data.hex", "missing/dir/out.v"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("failed to write Verilog output missing/dir/out.v"));
}
