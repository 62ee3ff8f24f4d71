mod registry_info;
