mod doc_id_set_builder_tests;
