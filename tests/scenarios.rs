//! End-to-end scenarios over the 3x1 line device (one qubit per cycle of
//! latitude), matching the documented behavior of the mapping/routing core.

use arvak_route::device::{DeviceSpec, EdgeSpec, QubitSpec};
use arvak_route::gate::GateSpec;
use arvak_route::qubit::{PhysicalQubit, VirtualQubit};
use arvak_route::{Mapper, RouteError};

fn line3() -> DeviceSpec {
    DeviceSpec {
        x_size: 3,
        y_size: 1,
        qubits: vec![
            QubitSpec { id: 0, x: 0, y: 0 },
            QubitSpec { id: 1, x: 1, y: 0 },
            QubitSpec { id: 2, x: 2, y: 0 },
        ],
        edges: vec![
            EdgeSpec { src: 0, dst: 1 },
            EdgeSpec { src: 1, dst: 0 },
            EdgeSpec { src: 1, dst: 2 },
            EdgeSpec { src: 2, dst: 1 },
        ],
        cycle_time: 1,
        swap_duration: 4,
    }
}

fn line3_plus_isolated() -> DeviceSpec {
    let mut spec = line3();
    spec.y_size = 2;
    spec.qubits.push(QubitSpec { id: 3, x: 0, y: 1 });
    spec
}

fn v(n: u32) -> VirtualQubit {
    VirtualQubit(n)
}

fn p(n: u32) -> PhysicalQubit {
    PhysicalQubit(n)
}

#[test]
fn scenario_1_base_policy_routes_distant_cx() {
    let mapper = Mapper::new(&line3(), "base").unwrap();
    let gates = vec![GateSpec::two("cx", v(0), v(2), 1)];
    let out = mapper.map_circuit(&gates).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].name, "swap");
    assert_eq!(out[0].operands.as_slice(), &[p(0), p(1)]);
    assert_eq!(out[1].name, "cx");
    assert_eq!(out[1].operands.as_slice(), &[p(1), p(2)]);
}

#[test]
fn scenario_2_minextend_picks_first_enumerated_split() {
    let mapper = Mapper::new(&line3(), "minextend").unwrap();
    let gates = vec![GateSpec::two("cx", v(0), v(2), 1)];
    let out = mapper.map_circuit(&gates).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].name, "swap");
    assert_eq!(out[0].operands.as_slice(), &[p(2), p(1)]);
    assert_eq!(out[1].name, "cx");
    assert_eq!(out[1].operands.as_slice(), &[p(0), p(1)]);
}

#[test]
fn scenario_3_single_qubit_gate_follows_its_virtual_qubit() {
    let mapper = Mapper::new(&line3(), "minextend").unwrap();
    let gates = vec![
        GateSpec::single("h", v(0), 1),
        GateSpec::two("cx", v(0), v(2), 1),
        GateSpec::single("h", v(2), 1),
    ];
    let out = mapper.map_circuit(&gates).unwrap();

    assert_eq!(out.len(), 4);
    assert_eq!(out[0].name, "h");
    assert_eq!(out[0].operands.as_slice(), &[p(0)]);
    assert_eq!(out[1].name, "swap");
    assert_eq!(out[1].operands.as_slice(), &[p(2), p(1)]);
    assert_eq!(out[2].name, "cx");
    assert_eq!(out[2].operands.as_slice(), &[p(0), p(1)]);
    assert_eq!(out[3].name, "h");
    assert_eq!(out[3].operands.as_slice(), &[p(1)]);
}

#[test]
fn scenario_4_base_policy_is_idempotent_on_adjacent_circuit() {
    let mapper = Mapper::new(&line3(), "base").unwrap();
    let gates = vec![
        GateSpec::two("cx", v(0), v(1), 1),
        GateSpec::two("cx", v(1), v(2), 1),
    ];
    let out = mapper.map_circuit(&gates).unwrap();

    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|g| g.name != "swap"));
    assert_eq!(out[0].operands.as_slice(), &[p(0), p(1)]);
    assert_eq!(out[1].operands.as_slice(), &[p(1), p(2)]);
}

#[test]
fn scenario_5_repeated_gate_routes_once() {
    let mapper = Mapper::new(&line3(), "minextend").unwrap();
    let gates = vec![
        GateSpec::two("cx", v(0), v(2), 1),
        GateSpec::two("cx", v(0), v(2), 1),
    ];
    let out = mapper.map_circuit(&gates).unwrap();

    assert_eq!(out.len(), 3);
    assert_eq!(out[0].name, "swap");
    assert_eq!(out[0].operands.as_slice(), &[p(2), p(1)]);
    assert_eq!(out[1].name, "cx");
    assert_eq!(out[1].operands.as_slice(), &[p(0), p(1)]);
    assert_eq!(out[2].name, "cx");
    assert_eq!(out[2].operands.as_slice(), &[p(0), p(1)]);
}

#[test]
fn scenario_6_disconnected_target_is_unroutable() {
    let mapper = Mapper::new(&line3_plus_isolated(), "minextend").unwrap();
    let gates = vec![GateSpec::two("cx", v(0), v(3), 1)];
    let err = mapper.map_circuit(&gates).unwrap_err();
    assert!(matches!(
        err,
        RouteError::UnroutableGate {
            src: PhysicalQubit(0),
            dst: PhysicalQubit(3)
        }
    ));
}

#[test]
fn boundary_single_qubit_gate_schedules_at_cycle_zero() {
    let mapper = Mapper::new(&line3(), "base").unwrap();
    let gates = vec![GateSpec::single("h", v(0), 1)];
    let out = mapper.map_circuit(&gates).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].operands.as_slice(), &[p(0)]);
}

#[test]
fn boundary_unsupported_arity_is_rejected() {
    let mapper = Mapper::new(&line3(), "base").unwrap();
    let gate = GateSpec {
        name: "ccx".to_string(),
        operands: [v(0), v(1), v(2)].into_iter().collect(),
        duration_ns: 1,
    };
    let err = mapper.map_circuit(&[gate]).unwrap_err();
    assert!(matches!(err, RouteError::UnsupportedArity { arity: 3, .. }));
}
