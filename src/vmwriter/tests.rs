use super::*;

fn rendered(f: impl FnOnce(&mut VmWriter<Vec<u8>>) -> io::Result<()>) -> String {
  let mut w = VmWriter::new(Vec::new());
  f(&mut w).unwrap();
  String::from_utf8(w.into_inner().unwrap()).unwrap()
}

#[test]
fn instruction_forms_match_the_wire_format_exactly() {
  assert_eq!(rendered(|w| w.write_push("local", 3)), "push local 3\n");
  assert_eq!(rendered(|w| w.write_pop("that", 0)), "pop that 0\n");
  assert_eq!(rendered(|w| w.write_arithmetic("add")), "add\n");
  assert_eq!(rendered(|w| w.write_label("L0")), "label L0\n");
  assert_eq!(rendered(|w| w.write_goto("L1")), "goto L1\n");
  assert_eq!(rendered(|w| w.write_if("L1")), "if-goto L1\n");
  assert_eq!(
    rendered(|w| w.write_call("Math.multiply", 2)),
    "call Math.multiply 2\n"
  );
  assert_eq!(
    rendered(|w| w.write_function("Main.main", 0)),
    "function Main.main 0\n"
  );
  assert_eq!(rendered(|w| w.write_return()), "return\n");
}

#[test]
fn instructions_accumulate_in_order() {
  let mut w = VmWriter::new(Vec::new());
  w.write_push("constant", 1).unwrap();
  w.write_push("constant", 2).unwrap();
  w.write_arithmetic("add").unwrap();
  w.write_return().unwrap();
  let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
  assert_eq!(
    out,
    "push constant 1\npush constant 2\nadd\nreturn\n"
  );
}
