mod idempotence_property_tests;
