pub(crate) mod derive;
