mod metrics_service_tests;
