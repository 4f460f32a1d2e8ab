//! Qubit mapping and routing core.
//!
//! Maps a stream of gates expressed over virtual qubits onto a
//! fixed-topology device by maintaining a virtual-to-physical mapping and
//! inserting SWAP gates wherever a two-qubit gate's operands are not
//! adjacent on the device.
//!
//! # Architecture
//!
//! ```text
//! DeviceSpec                 GateSpec stream
//!      в”Ӯ                            в”Ӯ
//!      в–ј                            в–ј
//! DeviceGrid (A) в”Җв”Җв”Җshared (Rc)в”Җв”Җв”Җв–є Past (D) в—„в”Җв”Җ V2R (B) + FreeCycleTable (C)
//!                                    в”Ӯ       в”‚
//!                                    в–ј       в”‚
//!                                 Router (E) в”Җв”ҳ  (inserts SWAPs, re-maps operands)
//!                                    в”Ӯ
//!                                    в–ј
//!                          Vec<PhysicalGate>  (Mapper::map_circuit's return)
//! ```
//!
//! [`Mapper`] is the entry point: build one from a [`device::DeviceSpec`] and
//! a policy name, then call [`Mapper::map_circuit`] once per circuit.
//!
//! # Example
//!
//! ```
//! use arvak_route::device::{DeviceSpec, EdgeSpec, QubitSpec};
//! use arvak_route::gate::GateSpec;
//! use arvak_route::qubit::VirtualQubit;
//! use arvak_route::Mapper;
//!
//! let device = DeviceSpec {
//!     x_size: 3,
//!     y_size: 1,
//!     qubits: vec![
//!         QubitSpec { id: 0, x: 0, y: 0 },
//!         QubitSpec { id: 1, x: 1, y: 0 },
//!         QubitSpec { id: 2, x: 2, y: 0 },
//!     ],
//!     edges: vec![
//!         EdgeSpec { src: 0, dst: 1 },
//!         EdgeSpec { src: 1, dst: 0 },
//!         EdgeSpec { src: 1, dst: 2 },
//!         EdgeSpec { src: 2, dst: 1 },
//!     ],
//!     cycle_time: 1,
//!     swap_duration: 4,
//! };
//!
//! let mapper = Mapper::new(&device, "minextend").unwrap();
//! let gates = vec![GateSpec::two("cx", VirtualQubit(0), VirtualQubit(2), 1)];
//! let physical = mapper.map_circuit(&gates).unwrap();
//! assert!(physical.iter().any(|g| g.name == "swap"));
//! ```

pub mod device;
pub mod error;
pub mod gate;
pub mod grid;
pub mod layout;
pub mod mapper;
pub mod past;
pub mod qubit;
pub mod router;
pub mod schedule;

pub use error::{RouteError, RouteResult};
pub use mapper::Mapper;
