use scene_host::{SceneHost, SceneIntrospect};

/// Combined trait for ring operations that mutate the scene and query it
/// on the same host object.
///
/// Lets callers pass one `&mut dyn HostBundle` instead of juggling a `&mut`
/// and a `&` borrow of the same value.
pub trait HostBundle: SceneHost + SceneIntrospect {
    fn as_introspect(&self) -> &dyn SceneIntrospect;
}

impl<T: SceneHost + SceneIntrospect> HostBundle for T {
    fn as_introspect(&self) -> &dyn SceneIntrospect {
        self
    }
}
