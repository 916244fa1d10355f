mod generator_registry;
