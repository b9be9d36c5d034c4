mod expense_service_tests;
