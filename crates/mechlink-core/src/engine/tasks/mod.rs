pub(crate) mod assembly;
pub(crate) mod identity;
pub(crate) mod observed;
pub(crate) mod pairs;
pub(crate) mod remap;
