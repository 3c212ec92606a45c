//! Modelos del sistema
//! 
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL. Las relaciones se expresan con claves foráneas
//! explícitas (`driver_id`, `route_id`, ...), no con referencias en memoria.

pub mod client;
pub mod delivery;
pub mod driver;
pub mod package;
pub mod route;
pub mod tracking_event;
pub mod vehicle;

pub use client::{Client, NewClient};
pub use delivery::{Delivery, DeliveryStatus, NewDelivery};
pub use driver::{Driver, NewDriver};
pub use package::{NewPackage, Package};
pub use route::{NewRoute, Route};
pub use tracking_event::{NewTrackingEvent, TrackingEvent};
pub use vehicle::{NewVehicle, Vehicle};
