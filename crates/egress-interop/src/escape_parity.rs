//! Fast/slow escape conformance harness.
//!
//! Runs each scenario through both the per-site `EscapeNode` and the uncached
//! `escape_slow` and compares results. `EGRESS_ESCAPE_TEST_PATH` narrows the
//! run to one path (`node` or `slow`) when bisecting a failure.

use std::env;
use std::sync::Arc;

use egress_runtime::{
    Address, BoxedPrimitive, ExportedAddress, ForeignPointer, FunctionHandle, Global, HostObject,
    LaneKind, Primitive, Type, TypedForeignObject, Value, VarBit, Vector, VirtualAllocation,
};

use crate::boundary::BoundaryValue;
use crate::errors::EscapeResult;
use crate::escape::EscapeNode;
use crate::slow_path::escape_slow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EscapePath {
    Node,
    Slow,
}

impl EscapePath {
    fn name(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Slow => "slow",
        }
    }

    fn run(self, value: &Value, export_type: Option<&Type>) -> EscapeResult<BoundaryValue> {
        match self {
            Self::Node => EscapeNode::new(export_type.cloned()).execute(value),
            Self::Slow => escape_slow(Some(value), export_type),
        }
    }
}

fn selected_paths() -> Vec<EscapePath> {
    match env::var("EGRESS_ESCAPE_TEST_PATH").ok().as_deref() {
        Some("node") => vec![EscapePath::Node],
        Some("slow") => vec![EscapePath::Slow],
        _ => vec![EscapePath::Node, EscapePath::Slow],
    }
}

fn run_conformance_case(case_name: &str, value: &Value, export_type: Option<&Type>) {
    let mut outputs: Vec<(EscapePath, EscapeResult<BoundaryValue>)> = selected_paths()
        .into_iter()
        .map(|path| (path, path.run(value, export_type)))
        .collect();

    if outputs.len() < 2 {
        return;
    }

    let (_, baseline) = outputs.remove(0);
    for (path, output) in outputs {
        assert_eq!(
            output,
            baseline,
            "escape parity mismatch in case '{case_name}' for path '{}'",
            path.name()
        );
    }
}

fn i8_ptr() -> Type {
    Type::pointer_to(Type::Integer(8))
}

#[test]
fn parity_scalars() {
    let cases = [
        ("bool", Value::Bool(true)),
        ("i8", Value::I8(-1)),
        ("i16", Value::I16(i16::MAX)),
        ("char", Value::Char(0x20ac)),
        ("i32", Value::I32(0)),
        ("i64", Value::I64(i64::MIN)),
        ("float", Value::F32(-0.5)),
        ("double", Value::F64(1e-300)),
        ("string", Value::string("egress")),
    ];
    for (name, value) in &cases {
        run_conformance_case(name, value, None);
        run_conformance_case(name, value, Some(&i8_ptr()));
    }
}

#[test]
fn parity_boxed() {
    let value = Value::Boxed(BoxedPrimitive::new(Primitive::I32(77)));
    run_conformance_case("boxed", &value, None);
}

#[test]
fn parity_null() {
    run_conformance_case("null", &Value::Null, None);
    run_conformance_case("null_typed", &Value::Null, Some(&i8_ptr()));
    assert_eq!(
        escape_slow(None, Some(&i8_ptr())).unwrap(),
        EscapeNode::new(Some(i8_ptr())).execute(&Value::Null).unwrap()
    );
}

#[test]
fn parity_addresses() {
    let null = Value::Address(Address::NULL);
    run_conformance_case("null_address", &null, Some(&i8_ptr()));
    run_conformance_case("null_address_untyped", &null, None);

    let addr = Value::Address(Address::from_u64(0xdead_0000));
    run_conformance_case("address", &addr, Some(&i8_ptr()));
    run_conformance_case("address_without_type", &addr, None);

    let exported = Value::Exported(ExportedAddress::new(Address::from_u64(0x20), Type::Float));
    run_conformance_case("exported", &exported, Some(&i8_ptr()));
}

#[test]
fn parity_function() {
    let value = Value::Function(FunctionHandle::new("qsort", 1));
    run_conformance_case("function", &value, None);
}

#[test]
fn parity_unsupported() {
    for kind in LaneKind::ALL {
        let value = Value::Vector(Vector::zeroed(kind, 3));
        run_conformance_case(kind.name(), &value, None);
    }
    run_conformance_case("varbit", &Value::VarBit(VarBit::from_i64(256, -7)), None);
}

#[test]
fn parity_foreign() {
    let host = HostObject::handle("map", 11);
    let typed = TypedForeignObject::wrap(Arc::clone(&host), Some(Type::Integer(64)));

    let base = Value::Foreign(ForeignPointer::new(Arc::clone(&typed)));
    run_conformance_case("foreign_typed", &base, None);

    let plain = Value::Foreign(ForeignPointer::new(Arc::clone(&host)));
    run_conformance_case("foreign_plain", &plain, None);

    let moved = Value::Foreign(ForeignPointer::new(typed).increment(-8));
    run_conformance_case("foreign_moved", &moved, None);
}

#[test]
fn parity_allocation_and_global() {
    let alloc = Value::Allocation(VirtualAllocation::from_bytes([0, 1, 2, 3]));
    run_conformance_case("allocation", &alloc, None);

    let global = Value::Global(Global::new("g", Value::I64(5)));
    run_conformance_case("global", &global, None);
}
